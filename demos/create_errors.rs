//! A simple example demonstrating how to create and inspect HTTP errors.

use http_errors::{classes, create_error, is_http_error, Arg, Builder};
use serde_json::json;

fn main() {
    env_logger::init();

    // Error from a status code
    match create_error!(404) {
        Ok(err) => {
            println!("Created error:");
            println!("Status: {}", err.status());
            println!("Name: {}", err.name());
            println!("Message: {}", err.message());
            println!("Expose: {}", err.expose());
        }
        Err(err) => {
            println!("Error creating error: {}", err);
        }
    }

    // Wrap an I/O error and attach extra properties
    let io = std::io::Error::other("connection refused");
    match create_error!(502, Arg::error(io), json!({ "upstream": "billing" })) {
        Ok(err) => {
            println!("\nWrapped error as JSON:");
            match serde_json::to_string_pretty(&err) {
                Ok(body) => println!("{}", body),
                Err(e) => println!("Could not serialize: {}", e),
            }
        }
        Err(err) => {
            println!("\nError creating error: {}", err);
        }
    }

    // A non-error status falls back to 500 and logs a deprecation advisory
    if let Ok(err) = create_error!(700) {
        println!("\nStatus 700 became {}", err.status());
    }

    // Builder paths
    let err = Builder::new().status(422).message("email is invalid").prop("field", "email").build();
    println!("\n{} ({}): {}", err.name(), err.status(), err);
    println!("Recognized as HTTP error: {}", is_http_error(&err));

    // Invalid arguments are reported with their position
    if let Err(err) = create_error!("message", 404) {
        println!("\nExpected error: {}", err);
    }

    println!("\nRegistered error classes:");
    for class in classes().iter() {
        println!("  {} {}", class.status(), class.name());
    }
}
