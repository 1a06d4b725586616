// Brand palette, applied as CSS custom properties on :root.

pub const PALETTE: &[(&str, &str)] = &[
    ("theme-primary", "#ff5200"),
    ("theme-lighter-alt", "#fff8f5"),
    ("theme-lighter", "#ffe3d6"),
    ("theme-light", "#ffcbb3"),
    ("theme-tertiary", "#ff9666"),
    ("theme-secondary", "#ff661f"),
    ("theme-dark-alt", "#e64900"),
    ("theme-dark", "#c23d00"),
    ("theme-darker", "#8f2d00"),
    ("neutral-lighter-alt", "#f3f0ec"),
    ("neutral-lighter", "#efece8"),
    ("neutral-light", "#e5e2df"),
    ("neutral-quaternary-alt", "#d6d2cf"),
    ("neutral-quaternary", "#ccc9c6"),
    ("neutral-tertiary-alt", "#c4c1be"),
    ("neutral-tertiary", "#a19f9d"),
    ("neutral-secondary", "#605e5c"),
    ("neutral-primary-alt", "#3b3a39"),
    ("neutral-primary", "#323130"),
    ("neutral-dark", "#201f1e"),
    ("black", "#000000"),
    ("white", "#f9f5f1"),
];

/// Below this width screens switch to a stacked layout
pub const NARROW_VIEWPORT: u32 = 600;

pub fn stylesheet() -> String {
    let vars: String = PALETTE
        .iter()
        .map(|(name, value)| format!("--{}: {};", name, value))
        .collect();
    format!(
        ":root {{ {} }} body {{ margin: 0; background: var(--white); color: var(--neutral-primary); }}",
        vars
    )
}
