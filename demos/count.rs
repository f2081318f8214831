//! Counts the number of records in a point file.

use pointnorm::Reader;

fn main() {
    let path = std::env::args()
        .nth(1)
        .expect("Must provide a path to a point file");
    let dataset = Reader::default()
        .read_path(path)
        .expect("Unable to read points");
    println!("Number of records: {}", dataset.len());
}
