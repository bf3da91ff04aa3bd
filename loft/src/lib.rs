pub use loft_core as core;
#[cfg(feature = "widgets")]
pub use loft_widgets as widgets;

pub mod prelude {
  pub use loft_core::prelude::*;

  #[cfg(feature = "widgets")]
  pub use super::widgets::prelude::*;
}
