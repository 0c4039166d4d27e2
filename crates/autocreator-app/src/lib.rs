// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod card;
pub mod demo;
pub mod forms;
pub mod ids;
pub mod model;
pub mod overlay;
pub mod state;
pub mod text;

pub use card::*;
pub use forms::*;
pub use ids::*;
pub use model::*;
pub use overlay::*;
pub use state::*;
pub use text::*;
