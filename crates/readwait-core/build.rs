//! Build script for readwait-core
//!
//! Checks system requirements before compilation:
//! - Minimum Rust version (Edition 2021 = Rust 1.56.0+)
//! - Target platform (syscall interception needs Linux ptrace)

fn main()
{
    // Check minimum Rust version
    // Edition 2021 requires Rust 1.56.0
    if let Ok(rustc_version) = rustc_version::version() {
        let min_rust_version = rustc_version::Version::parse("1.56.0").unwrap();

        if rustc_version < min_rust_version {
            panic!(
                "readwait-core requires Rust {} or newer (Edition 2021), found {}",
                min_rust_version, rustc_version
            );
        }
    } else {
        // If we can't get version (e.g., in some build environments), just warn
        println!("cargo:warning=could not verify Rust version");
    }

    // The interception backend is PTRACE_SYSCALL + process_vm_readv; both are
    // Linux-only interfaces.
    #[cfg(not(target_os = "linux"))]
    println!("cargo:warning=readwait-core only traces processes on Linux; other targets build the types but no controller");
}
