// File: crates/chart-compose/build.rs
// Summary: Links the Windows registry API that Skia's font manager pulls in.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // SkFontMgr_win enumerates installed fonts through the registry.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
