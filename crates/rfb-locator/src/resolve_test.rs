use super::*;

const USER: Coordinate = Coordinate::new(13.0827, 80.2707);

fn chennai_branch() -> Branch {
    Branch::new("br-chennai", "Chennai Central")
        .with_map_link("https://maps.google.com/@13.0878,80.2785,15z")
}

fn bangalore_branch() -> Branch {
    Branch::new("br-blr", "Bangalore").with_coordinates(12.9716, 77.5946)
}

#[test]
fn end_to_end_selects_nearby_chennai_branch() {
    let branches = vec![chennai_branch(), bangalore_branch()];
    let nearest = find_nearest_branch(USER, &branches).unwrap();
    assert_eq!(nearest.branch_id, "br-chennai");
    assert_eq!(nearest.branch_name, "Chennai Central");
    assert!(nearest.distance_km < 1.5, "got {}", nearest.distance_km);
}

#[test]
fn nearer_branch_wins_regardless_of_order() {
    let forward = vec![bangalore_branch(), chennai_branch()];
    let backward = vec![chennai_branch(), bangalore_branch()];
    assert_eq!(
        find_nearest_branch(USER, &forward).unwrap().branch_id,
        "br-chennai"
    );
    assert_eq!(
        find_nearest_branch(USER, &backward).unwrap().branch_id,
        "br-chennai"
    );
}

#[test]
fn user_near_bangalore_selects_bangalore() {
    let branches = vec![chennai_branch(), bangalore_branch()];
    let user = Coordinate::new(12.97, 77.59);
    let nearest = find_nearest_branch(user, &branches).unwrap();
    assert_eq!(nearest.branch_id, "br-blr");
}

#[test]
fn exact_tie_returns_first_in_input_order() {
    let branches = vec![
        Branch::new("first", "First").with_coordinates(10.0, 20.0),
        Branch::new("second", "Second").with_coordinates(10.0, 20.0),
    ];
    let nearest = find_nearest_branch(Coordinate::new(11.0, 21.0), &branches).unwrap();
    assert_eq!(nearest.branch_id, "first");

    // Mirror-image positions around the user are also exactly equidistant.
    let mirrored = vec![
        Branch::new("east", "East").with_coordinates(0.0, 1.0),
        Branch::new("west", "West").with_coordinates(0.0, -1.0),
    ];
    let nearest = find_nearest_branch(Coordinate::new(0.0, 0.0), &mirrored).unwrap();
    assert_eq!(nearest.branch_id, "east");
}

#[test]
fn branches_without_location_data_are_unresolvable() {
    let branches = vec![Branch::new("a", "A"), Branch::new("b", "B")];
    assert_eq!(
        find_nearest_branch(USER, &branches),
        Err(ResolutionError::NoResolvableBranches)
    );
}

#[test]
fn empty_branch_list_is_unresolvable() {
    assert_eq!(
        find_nearest_branch(USER, &[]),
        Err(ResolutionError::NoResolvableBranches)
    );
}

#[test]
fn unresolvable_branches_are_skipped() {
    let mut half = Branch::new("half", "Half coords");
    half.latitude = Some(13.0);

    let branches = vec![
        Branch::new("short", "Short link").with_map_link("https://maps.app.goo.gl/xyz"),
        half,
        bangalore_branch(),
    ];
    let nearest = find_nearest_branch(USER, &branches).unwrap();
    assert_eq!(nearest.branch_id, "br-blr");
}

#[test]
fn map_link_takes_priority_over_direct_coordinates() {
    let branch = Branch::new("x", "X")
        .with_map_link("https://maps.google.com/?q=13.05,80.21")
        .with_coordinates(1.0, 1.0);
    assert_eq!(
        branch_coordinate(&branch),
        Some(Coordinate::new(13.05, 80.21))
    );
}

#[test]
fn unparseable_map_link_falls_back_to_direct_coordinates() {
    let branch = Branch::new("x", "X")
        .with_map_link("https://maps.app.goo.gl/xyz")
        .with_coordinates(12.5, 79.5);
    assert_eq!(branch_coordinate(&branch), Some(Coordinate::new(12.5, 79.5)));
}

#[test]
fn zero_coordinates_are_a_real_location() {
    let branch = Branch::new("gulf", "Null Island").with_coordinates(0.0, 0.0);
    assert_eq!(branch_coordinate(&branch), Some(Coordinate::new(0.0, 0.0)));
}

#[test]
fn out_of_range_direct_coordinates_are_unresolvable() {
    let branches = vec![Branch::new("bad", "Bad").with_coordinates(130.0, 80.0)];
    assert_eq!(
        find_nearest_branch(USER, &branches),
        Err(ResolutionError::NoResolvableBranches)
    );
}

#[test]
fn out_of_range_user_position_is_rejected() {
    let branches = vec![chennai_branch()];
    let result = find_nearest_branch(Coordinate::new(13.0, 181.0), &branches);
    assert!(
        matches!(result, Err(ResolutionError::InvalidUserPosition { .. })),
        "got {result:?}"
    );
}

#[test]
fn resolve_branches_preserves_input_order() {
    let branches = vec![
        bangalore_branch(),
        Branch::new("none", "None"),
        chennai_branch(),
    ];
    let ids: Vec<&str> = resolve_branches(&branches)
        .iter()
        .map(|r| r.branch.id.as_str())
        .collect();
    assert_eq!(ids, vec!["br-blr", "br-chennai"]);
}
