//! Parses the querystring given as the first argument and prints it as JSON.
//!
//! ```sh
//! cargo run --example parse_query -- 'page=1&price[min]=100&sort[]=price&sort[]=-created'
//! ```

fn main() {
    let input = std::env::args().nth(1).unwrap_or_else(|| {
        "page=1&price[min]=100&price[max]=200&sort[]=price&sort[]=-created".to_string()
    });
    let input = input.trim_start_matches('?');

    let params = qs_parser::parse(input);
    println!("{}", serde_json::to_string_pretty(&params).unwrap());
}
