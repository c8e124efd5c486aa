use climate_api::api::generate_openapi_spec;
use std::env;
use std::fs;

fn main() {
    let output = env::args().nth(1).unwrap_or_else(|| "openapi.json".to_string());

    let spec = generate_openapi_spec();
    let json = serde_json::to_string_pretty(&spec).expect("Failed to serialize OpenAPI spec");

    fs::write(&output, json).expect("Failed to write OpenAPI spec");
    println!("Generated {}", output);
}
