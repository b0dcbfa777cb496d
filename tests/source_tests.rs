mod common;

use chrono::NaiveDate;
use common::{TestResult, init_logger, pipeline};
use folio::{AssetRef, CurateOptions, EditionSource, JsonEditionFile, OutputFormat, SnapshotStore};
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_snapshots(dir: &Path) -> TestResult {
    fs::write(
        dir.join("editions_2025-03-01T10-00-00.json"),
        serde_json::to_string(&json!([
            {"_id": "ed-11", "numero": 11},
            {"_id": "ed-12", "numero": 12}
        ]))?,
    )?;
    let articles: Vec<_> = [
        ("Sobre o acaso", "Filosofia", "ed-12"),
        ("Carta ao leitor", "Editorial", "ed-12"),
        ("Notícias do mês", "Fatos", "['ed-12']"),
        ("Arquivo", "Humor", "ed-11"),
        ("Rimas pagãs", "Poesia", "ed-12"),
    ]
    .iter()
    .map(|(title, kind, edition)| {
        json!({
            "titulo": title,
            "tipo": kind,
            "conteudo": format!("[b]{title}[/b]\n\nSegundo parágrafo."),
            "status": {"display": "Aprovado"},
            "edicao": edition,
            "autor_nome": "Redação"
        })
    })
    .collect();
    fs::write(
        dir.join("articles_2025-03-01T10-00-00.json"),
        serde_json::to_string(&articles)?,
    )?;
    Ok(())
}

fn options() -> CurateOptions {
    CurateOptions {
        date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
        cover_image: AssetRef::new("capa.jpg"),
        back_cover_image: AssetRef::new("contracapa.png"),
        logo: None,
    }
}

#[test]
fn curated_edition_flows_through_the_pipeline() -> TestResult {
    init_logger();
    let dir = tempdir()?;
    write_snapshots(dir.path())?;

    let edition = SnapshotStore::new(dir.path()).curate(&options())?;
    assert_eq!(edition.number, 12);
    assert_eq!(edition.subtitle, "Edição nº 12 – Março de 2025");

    let titles: Vec<&str> = edition.articles.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(
        titles,
        ["Carta ao leitor", "Sobre o acaso", "Notícias do mês", "Rimas pagãs"]
    );
    assert!(!edition.highlights.is_empty() && edition.highlights.len() <= 3);
    assert!(edition.highlights.iter().all(|h| h.title != "Carta ao leitor"));

    let doc = pipeline(OutputFormat::Json)?.assemble(&edition)?;
    let cover = doc.document().cover().unwrap();
    for highlight in &cover.highlights {
        let entry = doc
            .document()
            .toc()
            .iter()
            .find(|e| e.title == highlight.title)
            .unwrap();
        let expected = format!("pág. {}", entry.page_number.unwrap());
        assert_eq!(highlight.page_reference.as_deref(), Some(expected.as_str()));
    }
    Ok(())
}

#[test]
fn curation_is_reproducible() -> TestResult {
    let dir = tempdir()?;
    write_snapshots(dir.path())?;
    let store = SnapshotStore::new(dir.path());
    assert_eq!(store.curate(&options())?, store.curate(&options())?);
    Ok(())
}

#[test]
fn curated_edition_round_trips_through_a_json_file() -> TestResult {
    let dir = tempdir()?;
    write_snapshots(dir.path())?;
    let edition = SnapshotStore::new(dir.path()).curate(&options())?;

    let path = dir.path().join("edicao-12.json");
    fs::write(&path, serde_json::to_string_pretty(&edition)?)?;

    let mut source = JsonEditionFile::new(&path);
    assert_eq!(source.next_edition().unwrap()?, edition);
    assert!(source.next_edition().is_none());
    Ok(())
}
