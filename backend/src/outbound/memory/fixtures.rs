//! Built-in mock records the stores are seeded with.

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{
    ApplicationId, ApplicationStatus, IdValidationError, NewReview, Package, PackageId, Review,
    ReviewId, User, UserId, UserValidationError, VisaApplication,
};

/// Errors raised when a built-in mock record fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixtureError {
    #[error("invalid fixture identifier: {0}")]
    Id(#[from] IdValidationError),
    #[error("invalid fixture user: {0}")]
    User(#[from] UserValidationError),
    #[error("invalid fixture date {year}-{month}-{day}")]
    Date { year: i32, month: u32, day: u32 },
}

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, FixtureError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(FixtureError::Date { year, month, day })
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}

/// The account signed in at start-up when mock data is enabled.
pub fn mock_user() -> Result<User, FixtureError> {
    Ok(User::try_from_strings(
        "1",
        "Amina Rahman",
        "amina.rahman@example.com",
        "+44 20 7946 0018",
    )?)
}

/// Packages on offer, cheapest first.
pub fn catalogue_packages() -> Result<Vec<Package>, FixtureError> {
    Ok(vec![
        Package {
            id: PackageId::new("basic")?,
            title: "Basic".to_owned(),
            description: "Document checklist and a single review of your application.".to_owned(),
            price: 99,
            processing_time: "10-15 business days".to_owned(),
            features: strings(&["Document checklist", "Application review", "Email support"]),
        },
        Package {
            id: PackageId::new("standard")?,
            title: "Standard".to_owned(),
            description: "Guided preparation with a dedicated consultant.".to_owned(),
            price: 199,
            processing_time: "5-7 business days".to_owned(),
            features: strings(&[
                "Everything in Basic",
                "Dedicated consultant",
                "Form filling assistance",
                "Phone support",
            ]),
        },
        Package {
            id: PackageId::new("premium")?,
            title: "Premium".to_owned(),
            description: "End-to-end handling with priority processing.".to_owned(),
            price: 349,
            processing_time: "2-3 business days".to_owned(),
            features: strings(&[
                "Everything in Standard",
                "Priority processing",
                "Interview preparation",
                "Appointment booking",
                "24/7 support",
            ]),
        },
    ])
}

/// Sample applications in submission order.
pub fn mock_applications() -> Result<Vec<VisaApplication>, FixtureError> {
    let owner = UserId::new("1")?;
    Ok(vec![
        VisaApplication {
            id: ApplicationId::new("app-1001")?,
            user_id: owner.clone(),
            visa_type: "Tourist Visa".to_owned(),
            status: ApplicationStatus::Approved,
            submission_date: date(2024, 1, 12)?,
            full_name: "Amina Rahman".to_owned(),
            email: "amina.rahman@example.com".to_owned(),
            phone: "+44 20 7946 0018".to_owned(),
            nationality: "Kenyan".to_owned(),
            passport_number: "AK4402917".to_owned(),
        },
        VisaApplication {
            id: ApplicationId::new("app-1002")?,
            user_id: owner,
            visa_type: "Student Visa".to_owned(),
            status: ApplicationStatus::InProgress,
            submission_date: date(2024, 3, 4)?,
            full_name: "Amina Rahman".to_owned(),
            email: "amina.rahman@example.com".to_owned(),
            phone: "+44 20 7946 0018".to_owned(),
            nationality: "Kenyan".to_owned(),
            passport_number: "AK4402917".to_owned(),
        },
    ])
}

/// Sample reviews, newest first.
pub fn mock_reviews() -> Result<Vec<Review>, FixtureError> {
    let review = |id: &str, user: &str, name: &str, rating: u8, comment: &str| {
        Ok::<_, FixtureError>((
            ReviewId::new(id)?,
            NewReview {
                user_id: UserId::new(user)?,
                user_name: name.to_owned(),
                rating,
                comment: comment.to_owned(),
            },
        ))
    };

    let (id, fields) = review(
        "rev-3",
        "3",
        "Kofi Mensah",
        5,
        "Got my work permit approved on the first attempt.",
    )?;
    let newest = Review::restore(id, fields, date(2024, 4, 2)?, [UserId::new("1")?]);

    let (id, fields) = review(
        "rev-2",
        "2",
        "Lucia Ferreira",
        4,
        "Clear checklist, quick replies. Interview prep was worth it.",
    )?;
    let middle = Review::restore(
        id,
        fields,
        date(2024, 3, 18)?,
        [UserId::new("1")?, UserId::new("3")?],
    );

    let (id, fields) = review(
        "rev-1",
        "4",
        "Daniel Okafor",
        5,
        "Smooth process from start to finish.",
    )?;
    let oldest = Review::new(id, fields, date(2024, 2, 27)?);

    Ok(vec![newest, middle, oldest])
}
