//! Entry point for the WASM application

pub fn main() {
    consignment_client::run();
}
