mod app;
mod backend;
mod components;
mod pages;
mod router;

use anyhow::Result;
use app::App;

fn main() -> Result<()> {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
    Ok(())
}
