pub mod button;
pub mod layout;
pub mod lists;
pub mod text;

pub mod prelude {
  pub use super::button::*;
  pub use super::layout::*;
  pub use super::lists::*;
  pub use super::text::*;
}
