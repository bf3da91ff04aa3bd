use loft::prelude::*;

/// An immutable product record. The id is the stable key the window uses to
/// track the row across frames; ids must be unique within one list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Product {
  pub id: usize,
  pub title: String,
  pub is_fruit: bool,
}

impl Product {
  pub fn new(id: usize, title: impl Into<String>, is_fruit: bool) -> Self {
    Product { id, title: title.into(), is_fruit }
  }
}

/// The person the list belongs to, passed in explicitly rather than looked
/// up from ambient state.
pub struct User {
  pub name: String,
}

pub struct ShoppingList {
  pub user: User,
  pub products: Vec<Product>,
}

fn header(user: &User) -> Text { Text::new(format!("{}'s shopping list", user.name)) }

fn product_row(p: &Product) -> ListItem {
  let color = if p.is_fruit { Color::MAGENTA } else { Color::DARK_GREEN };
  ListItem::new(p.id, p.title.as_str(), color)
}

impl Widget for ShoppingList {
  fn build(&self, ctx: &mut BuildCtx) -> SceneNode {
    // the empty view is a variant picked once per build pass.
    let body = if self.products.is_empty() {
      E2::A(Text::new("Nothing to buy yet"))
    } else {
      E2::B(Lists { items: self.products.iter().map(product_row).collect() })
    };

    Column::default()
      .with_child(header(&self.user))
      .with_child(body)
      .build(ctx)
  }
}

pub fn sample_products() -> Vec<Product> {
  vec![
    Product::new(1, "Cabbage", false),
    Product::new(2, "Garlic", false),
    Product::new(3, "Apple", true),
  ]
}

#[cfg(test)]
mod tests {
  use loft_core::test_helper::TestWindow;

  use super::*;

  fn hedy() -> User { User { name: "Hedy Lamarr".into() } }

  #[test]
  fn rows_in_input_order_with_stable_keys() {
    let mut wnd = TestWindow::new(ShoppingList { user: hedy(), products: sample_products() });
    wnd.draw_frame();

    assert_eq!(wnd.texts(), [
      "Hedy Lamarr's shopping list",
      "Cabbage",
      "Garlic",
      "Apple"
    ]);

    let keyed = wnd.frame().unwrap().keyed();
    let keys: Vec<_> = keyed.iter().map(|(k, _)| (*k).clone()).collect();
    assert_eq!(keys, [Key::Kusize(1), Key::Kusize(2), Key::Kusize(3)]);
  }

  #[test]
  fn fruit_rows_are_styled_distinctly() {
    let mut wnd = TestWindow::new(ShoppingList { user: hedy(), products: sample_products() });
    wnd.draw_frame();

    let keyed = wnd.frame().unwrap().keyed();
    assert_eq!(keyed[0].1, Some(Color::DARK_GREEN));
    assert_eq!(keyed[1].1, Some(Color::DARK_GREEN));
    assert_eq!(keyed[2].1, Some(Color::MAGENTA));
  }

  #[test]
  fn empty_list_renders_the_placeholder() {
    let mut wnd = TestWindow::new(ShoppingList { user: hedy(), products: vec![] });
    wnd.draw_frame();
    assert_eq!(wnd.texts(), ["Hedy Lamarr's shopping list", "Nothing to buy yet"]);
    assert!(wnd.frame().unwrap().keyed().is_empty());
  }
}
