//! Build script for hexcalc-firmware
//!
//! The firmware is linked against the Xilinx standalone BSP, which provides
//! the Cortex-A9 boot code, MMU tables and the linker script. Point
//! `XIL_BSP_DIR` at an exported BSP (the directory holding `lscript.ld` and
//! `lib/libxil.a`).

use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=XIL_BSP_DIR");

    // Host builds (e.g. `cargo doc`) have nothing to link
    if env::var("CARGO_CFG_TARGET_OS").as_deref() != Ok("none") {
        return;
    }

    setup_linker();
}

/// Set up linker search paths for the BSP
fn setup_linker() {
    let Some(bsp) = env::var_os("XIL_BSP_DIR").map(PathBuf::from) else {
        println!("cargo:warning=XIL_BSP_DIR is not set; the firmware will not link");
        return;
    };

    println!("cargo:rustc-link-search={}", bsp.join("lib").display());
    println!("cargo:rustc-link-lib=static=xil");
    println!("cargo:rustc-link-arg=-T{}", bsp.join("lscript.ld").display());
}
