//! Transform a small stylesheet and print the result.
//!
//! Run with: cargo run -p adaptive-css --example transform

use adaptive_css::{Adaptive, AdaptiveConfig};

const STYLESHEET: &str = r#"
.card {
  width: 690px;
  padding: 24px 30px;
  border-bottom: 1px solid #e5e5e5;
  font-size: 28px; /* rem */
  line-height: 40px; /* no */
}

@media (orientation: landscape) {
  .card { margin: 0 auto 20px; }
}

@keyframes slide-in {
  from { transform: translateX(-750px); }
  to { transform: translateX(0); }
}
"#;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("Adaptive transform example");
    println!("==========================");
    println!();

    for config in [
        AdaptiveConfig::default(),
        AdaptiveConfig::default().base_dpr(3.0).auto_rem(true),
        AdaptiveConfig::default().minify(true),
    ] {
        println!("{config:?}");
        let adaptive = Adaptive::new(config).expect("Invalid configuration");
        match adaptive.parse(STYLESHEET) {
            Ok(css) => println!("{css}"),
            Err(e) => eprintln!("Transform failed: {e}"),
        }
        println!();
    }
}
