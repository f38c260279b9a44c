pub mod targets {
    pub const PARSER: &str = "parser";
    pub const TABLE: &str = "table";
}
