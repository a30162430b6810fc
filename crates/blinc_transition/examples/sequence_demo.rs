//! Sequence Demo
//!
//! Loads an animation document and prints sampled values at a fixed frame
//! rate. Run with `RUST_LOG=blinc_transition=debug` to see construction logs.

use blinc_transition::{Animation, AnimationDocument};
use tracing_subscriber::EnvFilter;

const DOC: &str = r#"
[transitions.fade]
from = 0
to = 1
duration = 0.4
easing = "easeOutQuad"

[sequences.card]
start = { from = { x = 0, y = 0, scale = 1 }, duration = 0.5, easing = "easeInOutCubic" }
keyframes = [
    { to = { x = 120 } },
    { to = { y = 40, scale = 1.2 }, delay = 0.1, easing = "easeOutBack" },
    { to = { x = 0, y = 0, scale = 1 }, duration = 0.8 },
]

[parallels.enter]
items = ["fade", "card"]
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let set = AnimationDocument::from_toml_str(DOC)?.build()?;
    let Some(enter) = set.get("enter") else {
        return Err("document has no `enter` animation".into());
    };

    let fps = 20.0;
    let frames = ((enter.ends_at() + 0.2) * fps).ceil() as u32;
    for frame in 0..=frames {
        let tick = frame as f64 / fps;
        let value = enter.sample(tick)?;
        println!("{tick:>5.2}s  {}", serde_json::to_string(&value)?);
    }

    Ok(())
}
