//! Handlers for `/profile` endpoints.
//!
//! | Method   | Path                    | Guarded | Notes |
//! |----------|-------------------------|---------|-------|
//! | `GET`    | `/profile`              | no      | Every profile joined with its owner |
//! | `POST`   | `/profile`              | yes     | Create or update the caller's profile |
//! | `DELETE` | `/profile`              | yes     | Remove the caller's profile and account |
//! | `GET`    | `/profile/me`           | yes     | |
//! | `GET`    | `/profile/user/{id}`    | no      | |
//! | `PUT`    | `/profile/experience`   | yes     | Inserted at the front |
//! | `DELETE` | `/profile/experience/{id}` | yes  | Unknown id is a no-op |
//! | `PUT`    | `/profile/education`    | yes     | Inserted at the front |
//! | `DELETE` | `/profile/education/{id}`  | yes  | Unknown id is a no-op |

use axum::{
  Json,
  extract::{Path, State},
};
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;
use venture_core::{
  profile::{
    NewEducation, NewExperience, Profile, ProfileUpdate, ProfileView, SocialLinks,
    parse_date, parse_skills,
  },
  store::NetworkStore,
};

use crate::{
  AppState, Message,
  error::{ApiError, FieldError},
  guard::AuthUser,
  load_user,
  parse_id,
  validate::{FieldRule, ValidJson, Validate},
};

const NO_PROFILE: &str = "There is no profile for this user";

// ─── Request bodies ──────────────────────────────────────────────────────────

/// Skills arrive either as `"rust, go"` or as `["rust", "go"]`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SkillsInput {
  Text(String),
  List(Vec<String>),
}

impl SkillsInput {
  fn into_list(self) -> Vec<String> {
    match self {
      SkillsInput::Text(raw) => parse_skills(&raw),
      SkillsInput::List(items) => items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect(),
    }
  }
}

#[derive(Debug, Default, Deserialize)]
pub struct ProfileBody {
  pub company:   Option<String>,
  pub website:   Option<String>,
  pub location:  Option<String>,
  pub bio:       Option<String>,
  pub status:    Option<String>,
  pub skills:    Option<SkillsInput>,
  pub youtube:   Option<String>,
  pub twitter:   Option<String>,
  pub facebook:  Option<String>,
  pub linkedin:  Option<String>,
  pub instagram: Option<String>,
}

impl Validate for ProfileBody {
  const RULES: &'static [FieldRule] = &[
    FieldRule::not_empty("status", "Status is required"),
    FieldRule::not_empty("skills", "Skills is required"),
  ];
}

/// Empty strings count as "not provided".
fn provided(value: Option<String>) -> Option<String> { value.filter(|v| !v.is_empty()) }

impl From<ProfileBody> for ProfileUpdate {
  fn from(body: ProfileBody) -> Self {
    ProfileUpdate {
      company:  provided(body.company),
      website:  provided(body.website),
      location: provided(body.location),
      bio:      provided(body.bio),
      status:   provided(body.status),
      skills:   body.skills.map(SkillsInput::into_list),
      social:   SocialLinks {
        youtube:   provided(body.youtube),
        twitter:   provided(body.twitter),
        facebook:  provided(body.facebook),
        linkedin:  provided(body.linkedin),
        instagram: provided(body.instagram),
      },
    }
  }
}

#[derive(Debug, Deserialize)]
pub struct ExperienceBody {
  pub title:       String,
  pub company:     String,
  pub location:    Option<String>,
  pub from:        String,
  pub to:          String,
  #[serde(default)]
  pub current:     bool,
  pub description: Option<String>,
}

impl Validate for ExperienceBody {
  const RULES: &'static [FieldRule] = &[
    FieldRule::not_empty("title", "Title is required"),
    FieldRule::not_empty("company", "Company is required"),
    FieldRule::not_empty("from", "From date is required"),
    FieldRule::not_empty("to", "To date is required"),
  ];
}

#[derive(Debug, Deserialize)]
pub struct EducationBody {
  pub school:       String,
  pub degree:       String,
  pub fieldofstudy: String,
  pub from:         String,
  pub to:           String,
  #[serde(default)]
  pub current:      bool,
  pub description:  Option<String>,
}

impl Validate for EducationBody {
  const RULES: &'static [FieldRule] = &[
    FieldRule::not_empty("school", "School is required"),
    FieldRule::not_empty("degree", "Degree is required"),
    FieldRule::not_empty("fieldofstudy", "Field of study is required"),
    FieldRule::not_empty("from", "From date is required"),
    FieldRule::not_empty("to", "To date is required"),
  ];
}

/// Parse both ends of a date range, reporting every bad field at once.
fn parse_range(from: &str, to: &str) -> Result<(NaiveDate, NaiveDate), ApiError> {
  match (parse_date("from", from), parse_date("to", to)) {
    (Ok(from), Ok(to)) => Ok((from, to)),
    (from, to) => {
      let errors = [from.err(), to.err()]
        .into_iter()
        .flatten()
        .filter_map(|e| match e {
          venture_core::Error::InvalidDate { field, .. } => {
            Some(FieldError::new(field, "Invalid date"))
          }
          _ => None,
        })
        .collect();
      Err(ApiError::Validation(errors))
    }
  }
}

// ─── Shared lookups ──────────────────────────────────────────────────────────

async fn load_profile<S>(state: &AppState<S>, user_id: Uuid) -> Result<Profile, ApiError>
where
  S: NetworkStore + Clone + 'static,
{
  state
    .store
    .get_profile(user_id)
    .await
    .map_err(ApiError::store)?
    .ok_or(ApiError::NotFound(NO_PROFILE))
}

// ─── Reads ───────────────────────────────────────────────────────────────────

/// `GET /profile/me`
pub async fn me<S>(
  State(state): State<AppState<S>>,
  AuthUser(user_id): AuthUser,
) -> Result<Json<ProfileView>, ApiError>
where
  S: NetworkStore + Clone + 'static,
{
  let view = state
    .store
    .get_profile_view(user_id)
    .await
    .map_err(ApiError::store)?
    .ok_or(ApiError::NotFound(NO_PROFILE))?;
  Ok(Json(view))
}

/// `GET /profile`
pub async fn list<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<ProfileView>>, ApiError>
where
  S: NetworkStore + Clone + 'static,
{
  let views = state.store.list_profile_views().await.map_err(ApiError::store)?;
  Ok(Json(views))
}

/// `GET /profile/user/{user_id}`
pub async fn by_user<S>(
  State(state): State<AppState<S>>,
  Path(user_id): Path<String>,
) -> Result<Json<ProfileView>, ApiError>
where
  S: NetworkStore + Clone + 'static,
{
  const NOT_FOUND: &str = "Profile not found";
  let user_id = parse_id(&user_id, NOT_FOUND)?;
  let view = state
    .store
    .get_profile_view(user_id)
    .await
    .map_err(ApiError::store)?
    .ok_or(ApiError::NotFound(NOT_FOUND))?;
  Ok(Json(view))
}

// ─── Writes ──────────────────────────────────────────────────────────────────

/// `POST /profile`
pub async fn upsert<S>(
  State(state): State<AppState<S>>,
  AuthUser(user_id): AuthUser,
  ValidJson(body): ValidJson<ProfileBody>,
) -> Result<Json<Profile>, ApiError>
where
  S: NetworkStore + Clone + 'static,
{
  // The profile row references its owner, so a deleted account cannot
  // recreate one.
  load_user(&state, user_id).await?;

  let profile = state
    .store
    .upsert_profile(user_id, ProfileUpdate::from(body))
    .await
    .map_err(ApiError::store)?;
  Ok(Json(profile))
}

/// `DELETE /profile`: removes the caller's profile, then the caller.
///
/// Posts written by the caller are left in place.
pub async fn delete_account<S>(
  State(state): State<AppState<S>>,
  AuthUser(user_id): AuthUser,
) -> Result<Json<Message>, ApiError>
where
  S: NetworkStore + Clone + 'static,
{
  state.store.delete_profile(user_id).await.map_err(ApiError::store)?;
  state.store.delete_user(user_id).await.map_err(ApiError::store)?;

  tracing::info!(%user_id, "deleted user");
  Ok(Json(Message { msg: "User deleted" }))
}

// ── Experience ──

/// `PUT /profile/experience`
pub async fn add_experience<S>(
  State(state): State<AppState<S>>,
  AuthUser(user_id): AuthUser,
  ValidJson(body): ValidJson<ExperienceBody>,
) -> Result<Json<Profile>, ApiError>
where
  S: NetworkStore + Clone + 'static,
{
  let (from, to) = parse_range(&body.from, &body.to)?;
  let mut profile = load_profile(&state, user_id).await?;

  profile.add_experience(NewExperience {
    title: body.title,
    company: body.company,
    location: provided(body.location),
    from,
    to,
    current: body.current,
    description: provided(body.description),
  });
  state.store.save_profile(&profile).await.map_err(ApiError::saving(NO_PROFILE))?;
  Ok(Json(profile))
}

/// `DELETE /profile/experience/{exp_id}`
pub async fn remove_experience<S>(
  State(state): State<AppState<S>>,
  AuthUser(user_id): AuthUser,
  Path(exp_id): Path<String>,
) -> Result<Json<Profile>, ApiError>
where
  S: NetworkStore + Clone + 'static,
{
  let mut profile = load_profile(&state, user_id).await?;
  let removed = Uuid::parse_str(&exp_id).is_ok_and(|id| profile.remove_experience(id));
  if removed {
    state.store.save_profile(&profile).await.map_err(ApiError::saving(NO_PROFILE))?;
  }
  Ok(Json(profile))
}

// ── Education ──

/// `PUT /profile/education`
pub async fn add_education<S>(
  State(state): State<AppState<S>>,
  AuthUser(user_id): AuthUser,
  ValidJson(body): ValidJson<EducationBody>,
) -> Result<Json<Profile>, ApiError>
where
  S: NetworkStore + Clone + 'static,
{
  let (from, to) = parse_range(&body.from, &body.to)?;
  let mut profile = load_profile(&state, user_id).await?;

  profile.add_education(NewEducation {
    school: body.school,
    degree: body.degree,
    fieldofstudy: body.fieldofstudy,
    from,
    to,
    current: body.current,
    description: provided(body.description),
  });
  state.store.save_profile(&profile).await.map_err(ApiError::saving(NO_PROFILE))?;
  Ok(Json(profile))
}

/// `DELETE /profile/education/{edu_id}`
pub async fn remove_education<S>(
  State(state): State<AppState<S>>,
  AuthUser(user_id): AuthUser,
  Path(edu_id): Path<String>,
) -> Result<Json<Profile>, ApiError>
where
  S: NetworkStore + Clone + 'static,
{
  let mut profile = load_profile(&state, user_id).await?;
  let removed = Uuid::parse_str(&edu_id).is_ok_and(|id| profile.remove_education(id));
  if removed {
    state.store.save_profile(&profile).await.map_err(ApiError::saving(NO_PROFILE))?;
  }
  Ok(Json(profile))
}
