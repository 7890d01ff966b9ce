/// Defaults for a Keebio bdn9, `keyboard.toml` is merged on top of these.
pub(crate) const BDN9_DEFAULT_CONFIG: &str = r#"
[keyboard]
name = "BDN9"
vendor_id = 0xCB10
product_id = 0x1133
manufacturer = "Keebio"

[layout]
rows = 3
cols = 3
layers = 3
"#;
