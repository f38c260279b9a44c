use booltable::{build_table_with_limit, render};
use serde::{Deserialize, Serialize};
use tsify::Tsify;
use wasm_bindgen::prelude::*;

const MAX_VARIABLES: usize = 16;

#[derive(Serialize, Deserialize, Tsify)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<bool>>,
    pub valid: bool,
    pub satisfiable: bool,
}

#[derive(Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi)]
pub struct TableResult {
    pub result: Result<Table, String>,
}

#[derive(Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi)]
pub struct HtmlResult {
    pub result: Result<String, String>,
}

#[wasm_bindgen]
pub fn truth_table(formula: String) -> TableResult {
    let result = build_table_with_limit(&formula, MAX_VARIABLES)
        .map(|table| {
            let attributes = table.get_attributes();

            Table {
                header: table.header,
                rows: table.rows,
                valid: attributes.valid,
                satisfiable: attributes.satisfiable,
            }
        })
        .map_err(|e| e.to_string());

    TableResult { result }
}

#[wasm_bindgen]
pub fn render_html(formula: String) -> HtmlResult {
    let result = build_table_with_limit(&formula, MAX_VARIABLES)
        .map(|table| render::html(&table))
        .map_err(|e| e.to_string());

    HtmlResult { result }
}
