mod counter;
use counter::Counters;
use loft::prelude::*;

fn main() -> Result<(), EventError> {
  env_logger::init();

  let app = Counters::new(2);
  let count = app.count().clone_writer();
  let mut wnd = Window::new(app).with_title("Counter");
  wnd.watch(&count);
  wnd.draw_frame();
  if let Some(frame) = wnd.frame() {
    println!("{frame}\n");
  }

  // Two taps on the first unit; both units display 2 afterwards.
  if let Some(id) = wnd.frame().and_then(|f| f.controls().first().copied()) {
    wnd.emit(Activation::Tap(id));
    wnd.emit(Activation::Tap(id));
  }
  wnd.run_until_stalled()?;
  if let Some(frame) = wnd.frame() {
    println!("{frame}");
  }
  Ok(())
}
