// tests/pep_reconcile.rs
//
// Status reconciliation against an in-memory PEP site.
mod common;

use common::{pep_index, pep_page, FakeSite, RecordingProgress, PEP_INDEX};
use docs_scrape::config::Config;
use docs_scrape::progress::NullProgress;
use docs_scrape::reports::pep::{self, reconcile};
use docs_scrape::ScrapeError;
use url::Url;

fn index_url() -> Url {
    Url::parse(PEP_INDEX).unwrap()
}

#[test]
fn consistent_rows_give_no_mismatches() {
    let site = FakeSite::new()
        .page(PEP_INDEX, pep_index(&[("Active", "pep-0001/"), ("Final", "pep-0008/"), ("Active", "pep-0020/")]))
        .page("https://peps.python.org/pep-0001/", pep_page("Active"))
        .page("https://peps.python.org/pep-0008/", pep_page("Final"))
        .page("https://peps.python.org/pep-0020/", pep_page("Active"));

    let r = reconcile(&site, &index_url(), encoding_rs::UTF_8, &mut NullProgress).unwrap();

    assert!(r.mismatches.is_empty());
    assert!(r.connection_errors.is_empty());
    let tally: Vec<(&str, usize)> = r.tally.iter().collect();
    assert_eq!(tally, vec![("Active", 2), ("Final", 1)]);
    assert_eq!(r.tally.total(), 3);

    let table = r.into_table();
    assert_eq!(table.rows().last().map(|row| row[1].as_str()), Some("3"));
}

#[test]
fn declared_draft_actual_active_is_one_mismatch() {
    let site = FakeSite::new()
        .page(PEP_INDEX, pep_index(&[("Active", "pep-0001/"), ("Draft", "pep-0002/")]))
        .page("https://peps.python.org/pep-0001/", pep_page("Active"))
        .page("https://peps.python.org/pep-0002/", pep_page("Active"));

    let r = reconcile(&site, &index_url(), encoding_rs::UTF_8, &mut NullProgress).unwrap();

    assert_eq!(r.tally.iter().collect::<Vec<_>>(), vec![("Active", 2)]);
    assert_eq!(r.mismatches.len(), 1);
    let m = &r.mismatches[0];
    assert_eq!(m.url.as_str(), "https://peps.python.org/pep-0002/");
    assert_eq!(m.declared, "Draft");
    assert_eq!(m.actual, "Active");
}

#[test]
fn unreachable_detail_page_is_skipped_not_fatal() {
    // pep-0003 has no page: the fake answers like a refused connection.
    let site = FakeSite::new()
        .page(PEP_INDEX, pep_index(&[("Final", "pep-0001/"), ("Final", "pep-0003/"), ("Withdrawn", "pep-0004/")]))
        .page("https://peps.python.org/pep-0001/", pep_page("Final"))
        .page("https://peps.python.org/pep-0004/", pep_page("Withdrawn"));

    let mut progress = RecordingProgress::default();
    let r = reconcile(&site, &index_url(), encoding_rs::UTF_8, &mut progress).unwrap();

    assert_eq!(r.connection_errors.len(), 1);
    assert_eq!(r.connection_errors[0].url, "https://peps.python.org/pep-0003/");
    assert_eq!(r.tally.iter().collect::<Vec<_>>(), vec![("Final", 1), ("Withdrawn", 1)]);
    assert!(r.mismatches.is_empty());

    // Rows after the failure were still visited, in order.
    assert_eq!(progress.total, Some(3));
    assert_eq!(progress.done.len(), 3);
    assert!(progress.finished);
    assert_eq!(
        site.requested(),
        vec![
            "https://peps.python.org/",
            "https://peps.python.org/pep-0001/",
            "https://peps.python.org/pep-0003/",
            "https://peps.python.org/pep-0004/",
        ]
    );
}

#[test]
fn unreachable_index_aborts_whole_report() {
    let site = FakeSite::new();
    let err = reconcile(&site, &index_url(), encoding_rs::UTF_8, &mut NullProgress).unwrap_err();
    assert!(matches!(err, ScrapeError::PageUnavailable(_)));
    assert_eq!(site.requested().len(), 1);
}

#[test]
fn detail_page_without_status_is_fatal() {
    let site = FakeSite::new()
        .page(PEP_INDEX, pep_index(&[("Active", "pep-0001/")]))
        .page("https://peps.python.org/pep-0001/", "<html><body><h1>no status</h1></body></html>");

    let err = reconcile(&site, &index_url(), encoding_rs::UTF_8, &mut NullProgress).unwrap_err();
    match err {
        ScrapeError::TagNotFound(t) => assert_eq!(t.tag, "abbr"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn build_produces_status_table_with_total() {
    let site = FakeSite::new()
        .page(PEP_INDEX, pep_index(&[("Final", "pep-0001/"), ("Active", "pep-0002/"), ("Final", "pep-0003/")]))
        .page("https://peps.python.org/pep-0001/", pep_page("Final"))
        .page("https://peps.python.org/pep-0002/", pep_page("Active"))
        .page("https://peps.python.org/pep-0003/", pep_page("Final"));
    let config = Config::new().unwrap();

    let table = pep::build(&site, &config, &mut NullProgress).unwrap();

    assert_eq!(table.header(), &["Статус".to_string(), "Количество".to_string()][..]);
    let body: Vec<Vec<String>> = table.rows().to_vec();
    assert_eq!(
        body,
        vec![
            vec!["Final".to_string(), "2".to_string()],
            vec!["Active".to_string(), "1".to_string()],
            vec!["Всего".to_string(), "3".to_string()],
        ]
    );
}
