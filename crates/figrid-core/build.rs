// File: crates/figrid-core/build.rs
// Summary: Links the Windows system libraries the Skia raster backend and its font manager need.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Registry APIs used by the system font manager.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
