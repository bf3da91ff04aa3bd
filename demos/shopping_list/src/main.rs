mod shopping_list;
use loft::prelude::*;
use shopping_list::{ShoppingList, User, sample_products};

fn main() {
  env_logger::init();

  let app = ShoppingList {
    user: User { name: "Hedy Lamarr".into() },
    products: sample_products(),
  };
  let mut wnd = Window::new(app).with_title("Shopping list");
  wnd.draw_frame();
  if let Some(frame) = wnd.frame() {
    println!("{frame}");
  }
}
