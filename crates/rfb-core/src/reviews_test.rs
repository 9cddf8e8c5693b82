use super::*;

fn valid_review() -> NewReview {
    NewReview {
        branch_id: "br-1".to_string(),
        guest_phone: "9876543210".to_string(),
        overall_rating: 5,
        ..NewReview::default()
    }
}

#[test]
fn valid_five_star_review_passes_without_text() {
    assert_eq!(validate_new_review(&valid_review()), Ok(()));
}

#[test]
fn missing_branch_is_reported_first() {
    let review = NewReview::default();
    assert_eq!(
        validate_new_review(&review),
        Err(ReviewValidationError::BranchRequired)
    );
}

#[test]
fn missing_overall_rating_is_reported_before_phone() {
    let review = NewReview {
        branch_id: "br-1".to_string(),
        ..NewReview::default()
    };
    assert_eq!(
        validate_new_review(&review),
        Err(ReviewValidationError::OverallRatingRequired)
    );
}

#[test]
fn missing_phone_is_rejected() {
    let review = NewReview {
        guest_phone: "   ".to_string(),
        ..valid_review()
    };
    assert_eq!(
        validate_new_review(&review),
        Err(ReviewValidationError::PhoneRequired)
    );
}

#[test]
fn low_rating_requires_grievance_text() {
    for rating in 1..=3 {
        let review = NewReview {
            overall_rating: rating,
            review_text: "  ".to_string(),
            ..valid_review()
        };
        assert_eq!(
            validate_new_review(&review),
            Err(ReviewValidationError::GrievanceRequired),
            "rating {rating}"
        );
    }
}

#[test]
fn low_rating_with_text_passes() {
    let review = NewReview {
        overall_rating: 2,
        review_text: "Food arrived cold".to_string(),
        ..valid_review()
    };
    assert_eq!(validate_new_review(&review), Ok(()));
}

#[test]
fn four_star_rating_does_not_require_text() {
    let review = NewReview {
        overall_rating: 4,
        ..valid_review()
    };
    assert_eq!(validate_new_review(&review), Ok(()));
}

#[test]
fn overall_rating_above_five_is_out_of_range() {
    let review = NewReview {
        overall_rating: 6,
        ..valid_review()
    };
    assert_eq!(
        validate_new_review(&review),
        Err(ReviewValidationError::RatingOutOfRange {
            field: "overallRating",
            min: 1
        })
    );
}

#[test]
fn aspect_rating_above_five_is_out_of_range() {
    let review = NewReview {
        value_rating: 9,
        ..valid_review()
    };
    assert_eq!(
        validate_new_review(&review),
        Err(ReviewValidationError::RatingOutOfRange {
            field: "valueRating",
            min: 0
        })
    );
}

#[test]
fn validation_messages_match_form_wording() {
    assert_eq!(
        ReviewValidationError::BranchRequired.to_string(),
        "Please select a branch"
    );
    assert_eq!(
        ReviewValidationError::GrievanceRequired.to_string(),
        "Please describe your grievance (required for 1-3 star ratings)"
    );
}

#[test]
fn delivery_questions_use_delivery_wording() {
    assert_eq!(
        question_label(RatingAspect::Service, VisitType::Delivery),
        "Delivery Time & Service"
    );
    assert_eq!(
        question_label(RatingAspect::Ambience, VisitType::Delivery),
        "Packaging Quality"
    );
    assert_eq!(
        question_label(RatingAspect::Cleanliness, VisitType::Delivery),
        "Food Hygiene"
    );
}

#[test]
fn dine_in_and_takeaway_questions_share_wording() {
    for visit in [VisitType::DineIn, VisitType::Takeaway] {
        assert_eq!(question_label(RatingAspect::Service, visit), "Service");
        assert_eq!(
            question_label(RatingAspect::Ambience, visit),
            "Ambience & Atmosphere"
        );
        assert_eq!(question_label(RatingAspect::Cleanliness, visit), "Cleanliness");
    }
    assert_eq!(
        question_label(RatingAspect::Taste, VisitType::Delivery),
        "Taste Quality"
    );
}

#[test]
fn rating_labels_cover_one_to_five() {
    assert_eq!(rating_label(1), Some("Angry"));
    assert_eq!(rating_label(5), Some("Loved it"));
    assert_eq!(rating_label(0), None);
    assert_eq!(rating_label(6), None);
}

#[test]
fn normalized_clears_table_number_unless_dine_in() {
    let takeaway = NewReview {
        table_number: "12".to_string(),
        visit_type: VisitType::Takeaway,
        ..valid_review()
    }
    .normalized();
    assert!(takeaway.table_number.is_empty());

    let dine_in = NewReview {
        table_number: "12".to_string(),
        visit_type: VisitType::DineIn,
        ..valid_review()
    }
    .normalized();
    assert_eq!(dine_in.table_number, "12");
}

#[test]
fn new_review_serializes_camel_case_with_default_takeaway() {
    let value = serde_json::to_value(valid_review()).unwrap();
    assert_eq!(value["branchId"], "br-1");
    assert_eq!(value["overallRating"], 5);
    assert_eq!(value["visitType"], "TAKEAWAY");
    assert_eq!(value["tableNumber"], "");
}

#[test]
fn visit_type_parses_cli_spellings() {
    assert_eq!("dine-in".parse::<VisitType>(), Ok(VisitType::DineIn));
    assert_eq!("DELIVERY".parse::<VisitType>(), Ok(VisitType::Delivery));
    assert!("drive-thru".parse::<VisitType>().is_err());
}

#[test]
fn review_reviewer_name_falls_back_to_user_then_anonymous() {
    let json = serde_json::json!({
        "id": "rv-1",
        "overallRating": 4,
        "tasteRating": 5,
        "serviceRating": null,
        "valueRating": 0,
        "reviewText": "Great filter coffee",
        "visitType": "DINE_IN",
        "tableNumber": "7",
        "createdAt": "2025-03-01T10:15:00Z",
        "user": { "name": "Priya" }
    });
    let review: Review = serde_json::from_value(json).unwrap();
    assert_eq!(review.reviewer_name(), "Priya");
    assert_eq!(review.visit_type, VisitType::DineIn);
    assert_eq!(review.aspect_ratings(), vec![(RatingAspect::Taste, 5)]);

    let anonymous = Review {
        user: None,
        guest_name: Some(String::new()),
        ..review
    };
    assert_eq!(anonymous.reviewer_name(), "Anonymous");
}
