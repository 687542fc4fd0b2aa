//! Print the OpenAPI document as JSON.

use backend::doc::ApiDoc;
use utoipa::OpenApi;

fn main() {
    let document = ApiDoc::openapi()
        .to_pretty_json()
        .expect("serialise OpenAPI document");
    println!("{document}");
}
