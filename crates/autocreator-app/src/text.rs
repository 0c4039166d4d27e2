// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::Language;

pub const PRODUCT_NAME: &str = "AutoCreator AI";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiText {
    DashboardTitle,
    DashboardSubtitle,
    NewProject,
    AddProjectCard,
    RecentProjects,
    NoProjects,
    Progress,
    WatchVideo,
    FormTitle,
    TopicLabel,
    TopicPlaceholder,
    DurationLabel,
    StyleLabel,
    Cancel,
    Create,
    Creating,
    StatsShown,
    StatsHidden,
    Reloaded,
    RequestSent,
    NoProjectSelected,
    TopicRequired,
    AlreadySubmitting,
}

impl UiText {
    pub const fn get(self, language: Language) -> &'static str {
        match language {
            Language::Arabic => self.arabic(),
            Language::English => self.english(),
        }
    }

    const fn arabic(self) -> &'static str {
        match self {
            Self::DashboardTitle => "لوحة التحكم",
            Self::DashboardSubtitle => "أضف مشروعك الجديد وابدأ بصناعة محتوى احترافي",
            Self::NewProject => "مشروع جديد",
            Self::AddProjectCard => "إضافة مشروع جديد",
            Self::RecentProjects => "المشاريع الحديثة",
            Self::NoProjects => "لا توجد مشاريع بعد",
            Self::Progress => "التقدم",
            Self::WatchVideo => "مشاهدة الفيديو",
            Self::FormTitle => "إنشاء فيديو جديد",
            Self::TopicLabel => "موضوع الفيديو",
            Self::TopicPlaceholder => "أدخل موضوع الفيديو... (مثال: تاريخ القهوة العربية)",
            Self::DurationLabel => "المدة (دقائق)",
            Self::StyleLabel => "أسلوب الفيديو",
            Self::Cancel => "إلغاء",
            Self::Create => "إنشاء الفيديو",
            Self::Creating => "جاري الإنشاء...",
            Self::StatsShown => "تم إظهار الإحصائيات",
            Self::StatsHidden => "تم إخفاء الإحصائيات",
            Self::Reloaded => "تم التحديث",
            Self::RequestSent => "تم إرسال طلب المشروع",
            Self::NoProjectSelected => "لم يتم اختيار مشروع",
            Self::TopicRequired => "موضوع الفيديو مطلوب",
            Self::AlreadySubmitting => "جاري إرسال طلب بالفعل",
        }
    }

    const fn english(self) -> &'static str {
        match self {
            Self::DashboardTitle => "dashboard",
            Self::DashboardSubtitle => "add a new project and start producing content",
            Self::NewProject => "new project",
            Self::AddProjectCard => "add a new project",
            Self::RecentProjects => "recent projects",
            Self::NoProjects => "no projects yet",
            Self::Progress => "progress",
            Self::WatchVideo => "watch video",
            Self::FormTitle => "create a new video",
            Self::TopicLabel => "video topic",
            Self::TopicPlaceholder => "enter a video topic... (e.g. the history of Arabic coffee)",
            Self::DurationLabel => "duration (minutes)",
            Self::StyleLabel => "video style",
            Self::Cancel => "cancel",
            Self::Create => "create video",
            Self::Creating => "creating...",
            Self::StatsShown => "stats shown",
            Self::StatsHidden => "stats hidden",
            Self::Reloaded => "reloaded",
            Self::RequestSent => "project request sent",
            Self::NoProjectSelected => "no project selected",
            Self::TopicRequired => "video topic is required -- enter a topic and retry",
            Self::AlreadySubmitting => "a submission is already in progress",
        }
    }
}
