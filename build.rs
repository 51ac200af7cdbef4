fn main() {
    // ESP-IDF link arguments are only needed when building for the target.
    // Host builds (unit / integration / property tests) skip embuild entirely.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
