#![allow(unused_macros)]
#![allow(unused_imports)]

/// Generates a product listing with `$rows` data rows, fields joined by `$delimiter`.
macro_rules! product_rows {
    ($rows:expr, $delimiter:expr) => {{
        let mut content = ["id", "name", "price"].join($delimiter);
        content.push('\n');
        for id in 0..$rows {
            let row = [id.to_string(), format!("product {id}"), format!("{}.99", id % 100)];
            content.push_str(&row.join($delimiter));
            content.push('\n');
        }
        content
    }};
}
pub(crate) use product_rows;

/// Writes `$content` into a temporary file named `$name` plus `$suffix`.
macro_rules! write_fixture {
    ($name:expr, $suffix:expr, $content:expr) => {{
        let mut file = tempfile::Builder::new()
            .prefix($name)
            .suffix($suffix)
            .tempfile()
            .expect("Benchmark setup: unable to create file");
        file.write_all($content.as_bytes()).expect("Benchmark setup: unable to write file");
        file
    }};
}
pub(crate) use write_fixture;
