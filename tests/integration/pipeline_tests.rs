use safetext::infrastructure::{scan_sources, BatchPipeline, MinifyService};
use safetext::Grammar;
use tempfile::tempdir;

#[tokio::test]
async fn minify_service_reports_stats() {
    let service = MinifyService::new();
    let source = "function add(a, b) {\n  return a + b; // sum\n}\n".to_string();
    let minified = service
        .minify_source(source.clone(), Grammar::Js)
        .await
        .unwrap();
    assert_eq!(minified, "function add(a,b){return a+b;}");

    let stats = service.stats(&source, &minified);
    assert!(stats.saved_bytes > 0);
    assert!(stats.reduction_percentage > 0.0);
    assert_eq!(stats.minified_size, minified.len());
}

#[tokio::test]
async fn batch_walks_nested_directories() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("project");
    std::fs::create_dir_all(src.join("nested")).unwrap();
    std::fs::write(src.join("app.js"), "let x = 1; // one\n").unwrap();
    std::fs::write(src.join("nested").join("util.mjs"), "export const y = 2 ;\n").unwrap();
    std::fs::write(src.join("style.css"), "body {\n  margin: 0;\n}\n").unwrap();
    std::fs::write(src.join("readme.md"), "not source").unwrap();

    let outdir = dir.path().join("dist");
    let result = BatchPipeline::new(&src, &outdir).run().await.unwrap();
    assert_eq!(result.outputs.len(), 3);

    assert_eq!(
        std::fs::read_to_string(outdir.join("app.min.js")).unwrap(),
        "let x=1;"
    );
    assert_eq!(
        std::fs::read_to_string(outdir.join("util.min.js")).unwrap(),
        "export const y=2;"
    );
    assert_eq!(
        std::fs::read_to_string(outdir.join("style.min.css")).unwrap(),
        "body{margin:0}"
    );
}

#[tokio::test]
async fn batch_skips_already_minified_and_vendored_files() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("app");
    std::fs::create_dir_all(src.join("node_modules")).unwrap();
    std::fs::write(src.join("main.js"), "let a = 1;").unwrap();
    std::fs::write(src.join("main.min.js"), "let a=1;").unwrap();
    std::fs::write(src.join("node_modules").join("lib.js"), "let b = 2;").unwrap();
    std::fs::write(src.join(".draft.js"), "let c = 3;").unwrap();

    let sources = scan_sources(&src).await.unwrap();
    assert_eq!(sources.len(), 1);
    assert!(sources[0].0.ends_with("main.js"));
    assert_eq!(sources[0].1, Grammar::Js);
}

#[tokio::test]
async fn batch_output_is_stable_under_reminification() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("in");
    std::fs::create_dir_all(&src).unwrap();
    std::fs::write(
        src.join("app.js"),
        "// header\nfunction f() {\n  return `v=${1 + 2}`;\n}\nlet r = f();\n",
    )
    .unwrap();

    let out1 = dir.path().join("dist1");
    BatchPipeline::new(&src, &out1).run().await.unwrap();
    let first = std::fs::read_to_string(out1.join("app.min.js")).unwrap();

    let src2 = dir.path().join("in2");
    std::fs::create_dir_all(&src2).unwrap();
    std::fs::write(src2.join("app.js"), &first).unwrap();
    let out2 = dir.path().join("dist2");
    BatchPipeline::new(&src2, &out2).run().await.unwrap();
    let second = std::fs::read_to_string(out2.join("app.min.js")).unwrap();

    assert_eq!(first, second);
}
