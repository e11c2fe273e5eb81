#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod config;
mod contact;
mod navigation;
mod reveal;
mod scroll;
mod snippets;
mod stagger;
mod theme;
mod throttle;
mod timers;
mod typing;

#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(test)]
mod test_support;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
