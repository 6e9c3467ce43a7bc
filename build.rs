fn main() {
    // The variadic entry points live in C; stable Rust cannot define them.
    cc::Build::new()
        .file("csrc/log.c")
        .file("csrc/system.c")
        .file("csrc/host.c")
        .include("csrc")
        .warnings(true)
        .compile("spa-support-shim");

    println!("cargo:rerun-if-changed=csrc/spa_support.h");
    println!("cargo:rerun-if-changed=csrc/log.c");
    println!("cargo:rerun-if-changed=csrc/system.c");
    println!("cargo:rerun-if-changed=csrc/host.c");
}
