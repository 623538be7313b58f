use std::env;

// Reads the features rustc will actually compile for. This works for native
// and cross builds alike, since codegen (not the build host) decides which
// intrinsics are legal.
fn target_has_sse2() -> bool {
    let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    let target_features = env::var("CARGO_CFG_TARGET_FEATURE").unwrap_or_default();

    matches!(arch.as_str(), "x86" | "x86_64")
        && target_features
            .split(',')
            .any(|feature| feature.trim().eq_ignore_ascii_case("sse2"))
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    println!("cargo::rustc-check-cfg=cfg(sse2)");
    println!("cargo::rustc-check-cfg=cfg(fallback)");

    let force_fallback = env::var_os("CARGO_FEATURE_FORCE_FALLBACK").is_some();

    // SSE2 when the target has it, otherwise the portable fallback
    let cfg_flag = if !force_fallback && target_has_sse2() {
        "sse2"
    } else {
        "fallback"
    };

    println!("applying: {cfg_flag}");

    println!("cargo:rustc-cfg={cfg_flag}");
}
