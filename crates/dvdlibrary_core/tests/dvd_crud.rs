use chrono::NaiveDate;
use dvdlibrary_core::{Dvd, DvdRepository, FileDvdRepository, LibraryService};

fn sample_dvd(title: &str) -> Dvd {
    let mut dvd = Dvd::new(title, NaiveDate::from_ymd_opt(2010, 7, 16).unwrap());
    dvd.mpaa_rating = "PG-13".to_string();
    dvd.director_name = "Christopher Nolan".to_string();
    dvd.studio = "Warner Bros".to_string();
    dvd.rating = 9;
    dvd
}

fn empty_repo() -> FileDvdRepository {
    // Map-only tests never touch the backing file.
    FileDvdRepository::new("unused.txt")
}

#[test]
fn add_then_find_returns_the_record() {
    let mut repo = empty_repo();
    let dvd = sample_dvd("Inception");

    let added = repo.add(dvd.clone());
    assert_eq!(added, Some(dvd.clone()));
    assert_eq!(repo.find_by_title("Inception"), Some(dvd));
}

#[test]
fn duplicate_add_keeps_the_first_record() {
    let mut repo = empty_repo();
    let first = sample_dvd("Inception");
    repo.add(first.clone());

    let mut second = sample_dvd("Inception");
    second.director_name = "Someone Else".to_string();
    second.rating = 2;

    assert_eq!(repo.add(second), None);
    assert_eq!(repo.find_by_title("Inception"), Some(first));
    assert_eq!(repo.list_all().len(), 1);
}

#[test]
fn remove_returns_the_removed_record() {
    let mut repo = empty_repo();
    let dvd = sample_dvd("Inception");
    repo.add(dvd.clone());

    assert_eq!(repo.remove("Inception"), Some(dvd));
    assert_eq!(repo.find_by_title("Inception"), None);
}

#[test]
fn remove_on_missing_title_leaves_store_unchanged() {
    let mut repo = empty_repo();
    repo.add(sample_dvd("Inception"));
    let before = repo.list_all();

    assert_eq!(repo.remove("Jaws"), None);
    assert_eq!(repo.list_all(), before);
}

#[test]
fn save_replaces_all_non_title_fields() {
    let mut repo = empty_repo();
    repo.add(sample_dvd("Inception"));

    let mut modified = Dvd::new("Inception", NaiveDate::from_ymd_opt(2010, 7, 8).unwrap());
    modified.mpaa_rating = "R".to_string();
    modified.director_name = "C. Nolan".to_string();
    modified.studio = "Legendary".to_string();
    modified.rating = 10;
    modified.note = "rewatched".to_string();

    assert_eq!(repo.save(modified.clone()), Some(modified.clone()));
    assert_eq!(repo.find_by_title("Inception"), Some(modified));
}

#[test]
fn save_on_missing_title_leaves_store_unchanged() {
    let mut repo = empty_repo();
    repo.add(sample_dvd("Inception"));
    let before = repo.list_all();

    assert_eq!(repo.save(sample_dvd("Jaws")), None);
    assert_eq!(repo.list_all(), before);
}

#[test]
fn list_all_returns_the_exact_set_sorted_by_title() {
    let mut repo = empty_repo();
    repo.add(sample_dvd("Memento"));
    repo.add(sample_dvd("Inception"));
    repo.add(sample_dvd("Tenet"));
    repo.remove("Memento");

    let titles: Vec<String> = repo
        .list_all()
        .iter()
        .map(|dvd| dvd.title().to_string())
        .collect();
    assert_eq!(titles, vec!["Inception".to_string(), "Tenet".to_string()]);
}

#[test]
fn service_delegates_to_the_repository() {
    let mut service = LibraryService::new(empty_repo());
    let dvd = sample_dvd("Inception");

    assert_eq!(service.add_dvd(dvd.clone()), Some(dvd.clone()));
    assert_eq!(service.get_dvd_by_title("Inception"), Some(dvd.clone()));
    assert_eq!(service.get_all_dvds(), vec![dvd.clone()]);
    assert_eq!(service.remove_dvd("Inception"), Some(dvd));
    assert_eq!(service.get_all_dvds(), Vec::new());
}
