use database_traits::dao::GenericDao;
use seeders::{CONTROL_CLUB_ID, OLD_TOWN_ID, sample_venues};
use uuid::Uuid;
use venues_dao::VenueDao;
use venues_errors::VenueError;
use venues_models::{NewVenue, UpdateVenue, VenueEvent};

fn setup_dao() -> VenueDao { VenueDao::new(sample_venues()) }

fn new_venue() -> NewVenue {
    NewVenue::builder()
        .name("Beer Hub")
        .venue_type("Pub")
        .location("BUCHAREST")
        .lat(44.4355)
        .lng(26.0990)
        .events(vec![
            VenueEvent::builder().title("Quiz").date("Every Monday").build(),
        ])
        .build()
}

#[tokio::test]
async fn test_find_by_id() {
    let dao = setup_dao();

    let venue = dao.find_by_id(CONTROL_CLUB_ID).await.unwrap().unwrap();
    assert_eq!(venue.name, "Control Club");

    assert!(dao.find_by_id(Uuid::now_v7()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_all_preserves_seed_order() {
    let dao = setup_dao();

    let all = dao.all().await.unwrap();

    assert_eq!(all, sample_venues());
}

#[tokio::test]
async fn test_create_assigns_fresh_id_and_appends() {
    let dao = setup_dao();
    let before = dao.len();

    let created = dao.create(new_venue()).await.unwrap();

    assert_eq!(dao.len(), before + 1);
    assert!(!created.id.is_nil());
    assert_eq!(created.events[0].bar_id, created.id);
    let all = dao.all().await.unwrap();
    assert_eq!(all.last().unwrap().id, created.id);
}

#[tokio::test]
async fn test_update_existing() {
    let dao = setup_dao();
    let update = UpdateVenue::builder().is_open(true).rating(4.9).build();

    let updated = dao.update(OLD_TOWN_ID, update).await.unwrap();

    assert_eq!(updated.id, OLD_TOWN_ID);
    assert!(updated.is_open);
    let stored = dao.find_by_id(OLD_TOWN_ID).await.unwrap().unwrap();
    assert_eq!(stored, updated);
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let dao = setup_dao();
    let missing = Uuid::now_v7();

    let result = dao.update(missing, UpdateVenue::default()).await;

    assert!(matches!(
        result,
        Err(VenueError::NotFound { venue_id }) if venue_id == missing
    ));
}

#[tokio::test]
async fn test_delete_reports_success_flag() {
    let dao = setup_dao();

    assert!(dao.delete(CONTROL_CLUB_ID).await.unwrap());
    assert!(!dao.delete(CONTROL_CLUB_ID).await.unwrap());
    assert!(dao.find_by_id(CONTROL_CLUB_ID).await.unwrap().is_none());
}

#[tokio::test]
async fn test_snapshot_is_detached() {
    let dao = setup_dao();
    let snapshot = dao.snapshot();

    dao.delete(OLD_TOWN_ID).await.unwrap();

    assert_eq!(snapshot.len(), dao.len() + 1);
}
