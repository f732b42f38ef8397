use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use medley::model::RemoteConfig;
use medley::remote::CatalogClient;

#[allow(dead_code)]
mod common;

fn read_addr_file(addr_file: &std::path::Path) -> Result<String> {
    let start = Instant::now();
    loop {
        if start.elapsed() > Duration::from_secs(5) {
            anyhow::bail!("addr file not written at {}", addr_file.display());
        }

        if let Ok(s) = std::fs::read_to_string(addr_file) {
            let s = s.trim();
            if !s.is_empty() {
                return Ok(format!("http://{}", s));
            }
        }

        thread::sleep(Duration::from_millis(10));
    }
}

fn spawn_server(
    data_dir: &std::path::Path,
    addr_file: &std::path::Path,
) -> Result<(Child, String)> {
    let child = Command::new(env!("CARGO_BIN_EXE_medley-server"))
        .args([
            "--addr",
            "127.0.0.1:0",
            "--addr-file",
            addr_file.to_str().unwrap(),
            "--data-dir",
            data_dir.to_str().unwrap(),
            "--stream-addr",
            "127.0.0.1:0",
        ])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .context("spawn medley-server")?;

    let base_url = read_addr_file(addr_file)?;
    common::wait_for_healthz(&base_url)?;
    Ok((child, base_url))
}

fn client_for(base_url: &str) -> Result<CatalogClient> {
    CatalogClient::new(RemoteConfig {
        base_url: base_url.to_string(),
        token: None,
    })
}

#[test]
fn catalog_survives_a_server_restart() -> Result<()> {
    let data_dir = tempfile::tempdir().context("create temp data dir")?;
    let data_dir_path = data_dir.path();

    let addr1 = data_dir_path.join("addr1.txt");
    let (mut child1, base_url1) = spawn_server(data_dir_path, &addr1)?;

    let client = client_for(&base_url1)?;
    let movies = client.create_category("Movies").context("create category")?;
    client
        .select_folder_source("/mnt/media/movies")
        .context("stage pick")?;
    let folder = client
        .create_folder_source(movies.id)
        .context("create folder")?;

    let _ = child1.kill();
    let _ = child1.wait();

    let addr2 = data_dir_path.join("addr2.txt");
    let (mut child2, base_url2) = spawn_server(data_dir_path, &addr2)?;
    let client = client_for(&base_url2)?;

    let categories = client.list_categories().context("list after restart")?;
    assert_eq!(categories, vec![movies.clone()]);

    let folders = client
        .list_folders(movies.id)
        .context("list folders after restart")?;
    assert_eq!(folders, vec![folder]);

    // Id allocation resumes past persisted records rather than reusing ids.
    let tv = client.create_category("TV").context("create after restart")?;
    assert!(tv.id > movies.id);

    let _ = child2.kill();
    let _ = child2.wait();
    Ok(())
}
