//! Funding progress bar.

use leptos::prelude::*;

/// Inline width style for a percentage, clamped to `[0, 100]`.
pub fn width_style(percent: f64) -> String {
    let percent = if percent.is_nan() { 0.0 } else { percent.clamp(0.0, 100.0) };
    format!("width: {percent:.1}%")
}

/// Whole-number label for a percentage.
pub fn percent_label(percent: f64) -> String {
    let percent = if percent.is_nan() { 0.0 } else { percent.clamp(0.0, 100.0) };
    format!("{percent:.0}% funded")
}

#[component]
pub fn ProgressBar(percent: Signal<f64>) -> impl IntoView {
    view! {
        <div class="progress">
            <div class="progress__track">
                <div class="progress__fill" style=move || width_style(percent.get())></div>
            </div>
            <span class="progress__label">{move || percent_label(percent.get())}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_is_clamped() {
        assert_eq!(width_style(-5.0), "width: 0.0%");
        assert_eq!(width_style(42.0), "width: 42.0%");
        assert_eq!(width_style(250.0), "width: 100.0%");
        assert_eq!(width_style(f64::NAN), "width: 0.0%");
    }

    #[test]
    fn label_rounds() {
        assert_eq!(percent_label(99.6), "100% funded");
        assert_eq!(percent_label(0.0), "0% funded");
    }
}
