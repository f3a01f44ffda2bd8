//! End-to-end tests for the color commands: `suggest`, `tone`, `describe`
//! and `palette`.

mod fixtures;
use fixtures::*;

// ============================================================================
// Suggest
// ============================================================================

#[test]
fn test_suggest_json() {
    let output = run_isolated(&["suggest", "#FF5733", "--json"]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let result = stdout_json(&output);
    assert_eq!(result["base"], "#FF5733");
    assert_eq!(result["complementary"], "#00A8CC");
    assert_eq!(result["analogous"][0], "#FF5715");
    assert_eq!(result["analogous"][1], "#E17533");
}

#[test]
fn test_suggest_accepts_lowercase_without_hash() {
    let output = run_isolated(&["suggest", "ff5733", "--json"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_json(&output)["base"], "#FF5733");
}

#[test]
fn test_suggest_human_readable() {
    let output = run_isolated(&["suggest", "#000000"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Complementary: #FFFFFF"));
    assert!(stdout.contains("#1E0000"));
    assert!(stdout.contains("#001E00"));
}

#[test]
fn test_suggest_invalid_color() {
    for color in ["#GGGGGG", "#FFF", "red", "#+12345"] {
        let output = run_isolated(&["suggest", color]);
        assert_eq!(output.status.code(), Some(1), "{color} should be rejected");
        assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid hex color"));
    }
}

// ============================================================================
// Tone
// ============================================================================

#[test]
fn test_tone_buckets() {
    let cases = [
        ("#FFFFFF", "light"),
        ("#C83232", "warm"),
        ("#3232C8", "cool"),
        ("#000000", "bold"),
        ("#808080", "neutral"),
    ];

    for (color, tone) in cases {
        let output = run_isolated(&["tone", color, "--json"]);
        assert_eq!(output.status.code(), Some(0));

        let result = stdout_json(&output);
        assert_eq!(result["tone"], tone, "{color} should be {tone}");
        assert_eq!(result["color"], color);
        assert!(result["suitability"].is_string());
    }
}

#[test]
fn test_tone_human_readable() {
    let output = run_isolated(&["tone", "#FFFFFF"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("#FFFFFF: light (brightness 255.0)"));
}

// ============================================================================
// Describe
// ============================================================================

#[test]
fn test_describe_json() {
    let output = run_isolated(&["describe", "#45B7D1", "--json"]);

    assert_eq!(output.status.code(), Some(0));

    let result = stdout_json(&output);
    assert_eq!(result["hex"], "#45B7D1");
    assert_eq!(result["r"], 69);
    assert_eq!(result["g"], 183);
    assert_eq!(result["b"], 209);
    assert_eq!(result["tone"], "cool");
    assert_eq!(result["suggestions"]["complementary"], "#BA482E");
}

#[test]
fn test_describe_invalid_color() {
    let output = run_isolated(&["describe", "not-a-color"]);
    assert_eq!(output.status.code(), Some(1));
}

// ============================================================================
// Palette
// ============================================================================

#[test]
fn test_palette_lists_curated_colors() {
    let output = run_isolated(&["palette", "--json"]);

    assert_eq!(output.status.code(), Some(0));

    let result = stdout_json(&output);
    let swatches = result.as_array().expect("palette should be an array");
    assert_eq!(swatches.len(), 15);
    assert_eq!(swatches[0]["color"], "#FF6B6B");
    assert_eq!(swatches[14]["color"], "#D7BDE2");
}

#[test]
fn test_palette_random_is_curated() {
    let palette = stdout_json(&run_isolated(&["palette", "--json"]));
    let colors: Vec<&str> = palette
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["color"].as_str().unwrap())
        .collect();

    for _ in 0..5 {
        let output = run_isolated(&["palette", "--random", "--json"]);
        assert_eq!(output.status.code(), Some(0));

        let pick = stdout_json(&output);
        let color = pick["color"].as_str().unwrap();
        assert!(colors.contains(&color), "{color} is not in the palette");
        assert!(pick["tone"].is_string());
    }
}
