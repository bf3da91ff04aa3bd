pub mod enum_widget;
pub mod key;
pub mod scene;
pub mod state;
#[cfg(feature = "test-utils")]
pub mod test_helper;
pub mod widget;
pub mod window;

pub mod prelude {
  pub use rxrust::prelude::*;

  pub use crate::enum_widget::*;
  pub use crate::key::*;
  pub use crate::scene::*;
  pub use crate::state::*;
  pub use crate::widget::*;
  pub use crate::window::*;
}
