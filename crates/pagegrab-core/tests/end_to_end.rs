//! Integration test: replayed gallery pages pointing at a local image server,
//! collected, fetched and archived.

mod common;

use common::image_server::{self, Route};
use pagegrab_core::archive::temp_path;
use pagegrab_core::collector::CollectEnd;
use pagegrab_core::config::GallerySelectors;
use pagegrab_core::page::HtmlGallery;
use pagegrab_core::run::{run_gallery, RunOptions};
use pagegrab_core::settle::SettleStrategy;
use tempfile::tempdir;
use url::Url;

fn options(dir: &std::path::Path) -> RunOptions {
    let mut opts = RunOptions::new(dir);
    opts.settle = SettleStrategy::Immediate;
    opts
}

fn sorted(mut v: Vec<String>) -> Vec<String> {
    v.sort();
    v
}

#[tokio::test]
async fn two_pages_with_rerendered_duplicate() {
    let base = image_server::start(vec![
        ("/g/a.jpg", Route::ok(b"image-a")),
        ("/g/b.jpg", Route::ok(b"image-b")),
        ("/g/c.jpg", Route::ok(b"image-c")),
    ]);
    let page_one = format!(
        r#"<img src="{base}/g/a.jpg"><img src="{base}/g/b.jpg">
           <a class="photo-navigation-link-next">Next</a>"#
    );
    let page_two = format!(
        r#"<img src="{base}/g/b.jpg"><img src="{base}/g/c.jpg">
           <a class="photo-navigation-link-next disabled">Next</a>"#
    );
    let mut gallery =
        HtmlGallery::new(vec![page_one, page_two], None, &GallerySelectors::default()).unwrap();

    let out = tempdir().unwrap();
    let summary = run_gallery(&mut gallery, &options(out.path())).await.unwrap();

    let names: Vec<&str> = summary.manifest.iter().map(|r| r.filename.as_str()).collect();
    assert_eq!(names, ["a.jpg", "b.jpg", "c.jpg"]);
    let collect = summary.collect.expect("collection finished");
    assert_eq!(collect.advances, 1);
    assert_eq!(collect.end, CollectEnd::NoNextPage);
    assert_eq!(summary.fetch.fetched, 3);
    assert_eq!(summary.fetch.failed, 0);
    assert_eq!(summary.archive_entries, 3);

    assert_eq!(summary.archive_path, out.path().join("gallery-images.zip"));
    assert!(!temp_path(&summary.archive_path).exists());
    let bytes = std::fs::read(&summary.archive_path).unwrap();
    assert_eq!(
        sorted(common::zip_names(&bytes)),
        ["a.jpg", "b.jpg", "c.jpg"]
    );
    assert_eq!(common::zip_entry(&bytes, "c.jpg"), b"image-c");
}

#[tokio::test]
async fn failed_fetch_is_omitted_from_archive() {
    let base = image_server::start(vec![
        ("/p/1.jpg", Route::ok(b"one")),
        ("/p/2.jpg", Route::status(500)),
        ("/p/3.jpg", Route::ok(b"three")),
    ]);
    let page = format!(
        r#"<img src="{base}/p/1.jpg"><img src="{base}/p/2.jpg"><img src="{base}/p/3.jpg">"#
    );
    let mut gallery = HtmlGallery::new(vec![page], None, &GallerySelectors::default()).unwrap();

    let out = tempdir().unwrap();
    let summary = run_gallery(&mut gallery, &options(out.path())).await.unwrap();

    assert_eq!(summary.manifest.len(), 3);
    assert_eq!(summary.fetch.fetched, 2);
    assert_eq!(summary.fetch.failed, 1);
    assert_eq!(summary.archive_entries, 2);
    let bytes = std::fs::read(&summary.archive_path).unwrap();
    let names = sorted(common::zip_names(&bytes));
    assert_eq!(names, ["1.jpg", "3.jpg"]);
}

#[tokio::test]
async fn unreachable_host_is_omitted_from_archive() {
    let base = image_server::start(vec![("/p/ok.jpg", Route::ok(b"ok"))]);
    // Nothing listens on loopback port 1, so this fetch fails in transport.
    let page = format!(
        r#"<img src="http://127.0.0.1:1/x.jpg"><img src="{base}/p/ok.jpg">"#
    );
    let mut gallery = HtmlGallery::new(vec![page], None, &GallerySelectors::default()).unwrap();

    let out = tempdir().unwrap();
    let summary = run_gallery(&mut gallery, &options(out.path())).await.unwrap();

    assert_eq!(summary.manifest.len(), 2);
    assert_eq!(summary.fetch.fetched, 1);
    assert_eq!(summary.fetch.failed, 1);
    assert_eq!(summary.archive_entries, 1);
    let bytes = std::fs::read(&summary.archive_path).unwrap();
    assert_eq!(common::zip_names(&bytes), ["ok.jpg"]);
}

#[tokio::test]
async fn same_filename_keeps_later_fetch() {
    let base = image_server::start(vec![
        ("/a/photo.jpg", Route::ok(b"first")),
        ("/b/photo.jpg", Route::ok(b"second")),
    ]);
    let page = format!(r#"<img src="{base}/a/photo.jpg"><img src="{base}/b/photo.jpg">"#);
    let mut gallery = HtmlGallery::new(vec![page], None, &GallerySelectors::default()).unwrap();

    let out = tempdir().unwrap();
    let summary = run_gallery(&mut gallery, &options(out.path())).await.unwrap();

    assert_eq!(summary.manifest.len(), 2);
    assert_eq!(summary.fetch.fetched, 2);
    assert_eq!(summary.fetch.failed, 0);
    assert_eq!(summary.archive_entries, 1);
    let bytes = std::fs::read(&summary.archive_path).unwrap();
    assert_eq!(common::zip_names(&bytes), ["photo.jpg"]);
    assert_eq!(common::zip_entry(&bytes, "photo.jpg"), b"second");
}

#[tokio::test]
async fn fallback_attribute_and_relative_sources() {
    let base = image_server::start(vec![
        ("/album/x.jpg", Route::ok(b"x")),
        ("/album/y.jpg", Route::ok(b"y")),
    ]);
    let page = r#"
        <img ng-src="/album/x.jpg">
        <img src="y.jpg">
        <img>"#
        .to_string();
    let page_url = Url::parse(&format!("{base}/album/index.html")).unwrap();
    let mut gallery =
        HtmlGallery::new(vec![page], Some(page_url), &GallerySelectors::default()).unwrap();

    let out = tempdir().unwrap();
    let mut opts = options(out.path());
    opts.output_name = "album.zip".to_string();
    let summary = run_gallery(&mut gallery, &opts).await.unwrap();

    assert_eq!(summary.manifest.len(), 2);
    assert_eq!(summary.archive_path, out.path().join("album.zip"));
    let bytes = std::fs::read(&summary.archive_path).unwrap();
    assert_eq!(sorted(common::zip_names(&bytes)), ["x.jpg", "y.jpg"]);
}

#[tokio::test]
async fn empty_gallery_still_writes_archive() {
    let mut gallery = HtmlGallery::new(
        vec!["<p>no images here</p>".to_string()],
        None,
        &GallerySelectors::default(),
    )
    .unwrap();

    let out = tempdir().unwrap();
    let summary = run_gallery(&mut gallery, &options(out.path())).await.unwrap();

    assert!(summary.manifest.is_empty());
    assert_eq!(summary.archive_entries, 0);
    let bytes = std::fs::read(&summary.archive_path).unwrap();
    assert!(common::zip_names(&bytes).is_empty());
}
