//! End-to-end tests for the adaptive transform.

use adaptive_css::prelude::*;

fn run(config: AdaptiveConfig, css: &str) -> String {
    Adaptive::new(config)
        .expect("valid config")
        .parse(css)
        .expect("parse succeeds")
}

#[test]
fn integration_fixture() {
    let fixture = r#"
.a {
  width: 750px;
  height: 64px; /* rem */
  border: 1px solid #ddd;
  font-size: 28px; /* no */
  margin: 0 auto 10px;
}
@media (min-width: 100px) {
  .b { border-top: 1px solid red; }
}
@keyframes fade {
  from { top: 1px; }
  to { top: 20px; }
}
"#;

    let expected = "\
.a {
  width: 375px;
  height: 0.853333rem;
  border: 1px solid #ddd;
  font-size: 28px;
  margin: 0 auto 5px;
}

.hairlines .a {
  border: 0.5px solid #ddd;
}

@media (min-width: 100px) {
  .b {
    border-top: 1px solid red;
  }

  .hairlines .b {
    border-top: 0.5px solid red;
  }
}

@keyframes fade {
  from {
    top: 1px;
  }
  to {
    top: 10px;
  }
}";

    assert_eq!(run(AdaptiveConfig::default(), fixture), expected);
}

#[test]
fn rem_unit() {
    let output = run(
        AdaptiveConfig::default().rem_unit(64.0),
        ".a { height: 64px; /*rem*/ }",
    );
    assert_eq!(output, ".a {\n  height: 1rem;\n}");
}

#[test]
fn rem_directive_without_whitespace() {
    let output = run(
        AdaptiveConfig::default().base_dpr(2.0).rem_unit(64.0),
        ".a{height:64px;/*rem*/}",
    );
    assert_eq!(output, ".a {\n  height: 1rem;\n}");
}

#[test]
fn base_dpr() {
    let output = run(AdaptiveConfig::default().base_dpr(3.0), ".a { height: 75px; }");
    assert_eq!(output, ".a {\n  height: 25px;\n}");
}

#[test]
fn base_dpr_and_half_pixel() {
    let output = run(
        AdaptiveConfig::default().base_dpr(3.0),
        ".a { border: 1px solid #ccc; }",
    );
    assert_eq!(
        output,
        ".a {\n  border: 1px solid #ccc;\n}\n\n.hairlines .a {\n  border: 0.5px solid #ccc;\n}"
    );
}

#[test]
fn rem_precision() {
    let output = run(
        AdaptiveConfig::default().rem_precision(8),
        ".a { height: 65px; /*rem*/ }",
    );
    assert_eq!(output, ".a {\n  height: 0.86666667rem;\n}");
}

#[test]
fn hairline_class() {
    let output = run(
        AdaptiveConfig::default().hairline_class("hairline"),
        ".a { border: 1px solid #ccc; }",
    );
    assert_eq!(
        output,
        ".a {\n  border: 1px solid #ccc;\n}\n\n.hairline .a {\n  border: 0.5px solid #ccc;\n}"
    );
}

#[test]
fn zero_is_unitless() {
    let output = run(
        AdaptiveConfig::default().auto_rem(true).minify(true),
        ".a { margin: 0px 150px; } .b { padding: 0px; /* px */ }",
    );
    assert_eq!(output, ".a{margin:0 2rem}.b{padding:0}");
}

#[test]
fn no_directive_keeps_value_but_allows_hairline() {
    let output = run(
        AdaptiveConfig::default().base_dpr(3.0).minify(true),
        ".a { height: 150px; /* no */ border-bottom: 2px solid; /* no */ }",
    );
    assert_eq!(
        output,
        ".a{height:150px;border-bottom:2px solid}.hairlines .a{border-bottom:0.666667px solid}"
    );
}

#[test]
fn unknown_comment_is_kept_and_default_applies() {
    let output = run(
        AdaptiveConfig::default(),
        ".a { height: 150px; /* todo */ }",
    );
    assert_eq!(output, ".a {\n  height: 75px;\n  /* todo */\n}");
}

#[test]
fn auto_rem_defaults_to_rem() {
    let output = run(
        AdaptiveConfig::default().auto_rem(true).minify(true),
        ".a { width: 750px; height: 150px; /* px */ }",
    );
    assert_eq!(output, ".a{width:10rem;height:75px}");
}

#[test]
fn rerun_does_not_duplicate_hairlines() {
    let adaptive = Adaptive::new(AdaptiveConfig::default().auto_rem(true)).unwrap();

    let first = adaptive.parse(".a { height: 150px; border-width: 4px; }").unwrap();
    assert_eq!(first, ".a {\n  height: 2rem;\n  border-width: 0.053333rem;\n}");

    let second = adaptive.parse(&first).unwrap();
    assert_eq!(second, first);
}

#[test]
fn media_rules_get_hairlines_keyframes_do_not() {
    let css = "@media screen { .a { border: 1px solid; } } \
               @-webkit-keyframes k { 0% { border: 1px solid; } }";
    let output = run(AdaptiveConfig::default().minify(true), css);
    assert_eq!(
        output,
        "@media screen{.a{border:1px solid}.hairlines .a{border:0.5px solid}}\
         @-webkit-keyframes k{0%{border:1px solid}}"
    );
}

#[test]
fn nested_conditional_groups() {
    let css = "@supports (display: grid) { @media print { .a { top: 1px; } } }";
    let output = run(AdaptiveConfig::default().minify(true), css);
    assert_eq!(
        output,
        "@supports (display: grid){@media print{.a{top:1px}.hairlines .a{top:0.5px}}}"
    );
}

#[test]
fn only_px_tokens_change() {
    let output = run(
        AdaptiveConfig::default().minify(true),
        ".a { background: url(bg-20px.png) 10px 50% / 40px; content: \"4px\"; width: calc(100% - 20px); }",
    );
    assert_eq!(
        output,
        ".a{background:url(bg-20px.png) 5px 50% / 20px;content:\"4px\";width:calc(100% - 10px)}"
    );
}

#[test]
fn pass_through_at_rules_are_untouched() {
    let css = "@import url(\"base.css\");\n@font-face { font-family: x; size-adjust: 4px; }";
    let output = run(AdaptiveConfig::default(), css);
    assert_eq!(
        output,
        "@import url(\"base.css\");\n\n@font-face {\n  font-family: x;\n  size-adjust: 4px;\n}"
    );
}

#[test]
fn json_options() {
    let config = AdaptiveConfig::from_json(r#"{ "baseDpr": 3, "hairlineClass": "thin", "minify": true }"#)
        .unwrap();
    let output = run(config, ".a { border: 1px solid; }");
    assert_eq!(output, ".a{border:1px solid}.thin .a{border:0.5px solid}");
}

#[test]
fn one_adaptive_many_threads() {
    let adaptive = Adaptive::new(AdaptiveConfig::default().minify(true)).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (1..=4)
            .map(|n| {
                let adaptive = &adaptive;
                scope.spawn(move || adaptive.parse(&format!(".a{{width:{}px}}", n * 100)).unwrap())
            })
            .collect();

        let outputs: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(
            outputs,
            [".a{width:50px}", ".a{width:100px}", ".a{width:150px}", ".a{width:200px}"]
        );
    });
}

#[test]
fn nested_rules_pass_through() {
    let output = run(
        AdaptiveConfig::default(),
        ".a { &:hover { top: 1px } height: 10px; }",
    );
    assert_eq!(output, ".a {\n  &:hover { top: 1px }\n  height: 5px;\n}");
}

#[test]
fn keyframe_offsets_stay_on_one_line() {
    let output = run(
        AdaptiveConfig::default(),
        "@keyframes k { 50%, 75% { top: 4px; } }",
    );
    assert_eq!(output, "@keyframes k {\n  50%, 75% {\n    top: 2px;\n  }\n}");
}
