use pointnorm::{Method, Reader, Writer};
use tempfile::NamedTempFile;

#[test]
fn normalized_file_reads_back() {
    let dataset = Reader::default().read_path("tests/data/points.csv").unwrap();
    let normalized = pointnorm::normalize(&dataset, Method::CenteredMaxAbs);

    let tempfile = NamedTempFile::new().unwrap();
    {
        let mut writer = Writer::from_path(tempfile.path()).unwrap();
        writer.write_dataset(&normalized).unwrap();
        assert_eq!(7, writer.count());
        let _ = writer.into_inner().unwrap();
    }

    let reread = Reader::default().read_path(tempfile.path()).unwrap();
    assert_eq!(normalized, reread);
}
