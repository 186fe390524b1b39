//! Profile documents and the entries embedded in them.
//!
//! A profile is stored as a single document per user. Experience and
//! education entries have no lifecycle of their own: they change only when
//! the owning profile is saved.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result, user::UserSummary};

// ─── Social links ────────────────────────────────────────────────────────────

/// Optional links to the owner's social accounts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub youtube:   Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub twitter:   Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub facebook:  Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub linkedin:  Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub instagram: Option<String>,
}

impl SocialLinks {
  /// Overwrite each link that `update` provides; keep the rest.
  pub fn merge(&mut self, update: SocialLinks) {
    let SocialLinks { youtube, twitter, facebook, linkedin, instagram } = update;
    merge_field(&mut self.youtube, youtube);
    merge_field(&mut self.twitter, twitter);
    merge_field(&mut self.facebook, facebook);
    merge_field(&mut self.linkedin, linkedin);
    merge_field(&mut self.instagram, instagram);
  }

  pub fn is_empty(&self) -> bool { *self == SocialLinks::default() }
}

fn merge_field(slot: &mut Option<String>, update: Option<String>) {
  if update.is_some() {
    *slot = update;
  }
}

// ─── Embedded entries ────────────────────────────────────────────────────────

/// A position held, most recent first within [`Profile::experience`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
  pub id:          Uuid,
  pub title:       String,
  pub company:     String,
  pub location:    Option<String>,
  pub from:        NaiveDate,
  pub to:          NaiveDate,
  #[serde(default)]
  pub current:     bool,
  pub description: Option<String>,
}

/// Input to [`Profile::add_experience`]; the entry id is assigned on insert.
#[derive(Debug, Clone)]
pub struct NewExperience {
  pub title:       String,
  pub company:     String,
  pub location:    Option<String>,
  pub from:        NaiveDate,
  pub to:          NaiveDate,
  pub current:     bool,
  pub description: Option<String>,
}

/// A course of study, most recent first within [`Profile::education`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
  pub id:           Uuid,
  pub school:       String,
  pub degree:       String,
  pub fieldofstudy: String,
  pub from:         NaiveDate,
  pub to:           NaiveDate,
  #[serde(default)]
  pub current:      bool,
  pub description:  Option<String>,
}

/// Input to [`Profile::add_education`].
#[derive(Debug, Clone)]
pub struct NewEducation {
  pub school:       String,
  pub degree:       String,
  pub fieldofstudy: String,
  pub from:         NaiveDate,
  pub to:           NaiveDate,
  pub current:      bool,
  pub description:  Option<String>,
}

// ─── Profile ─────────────────────────────────────────────────────────────────

/// The professional profile of one user. At most one exists per `user_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
  pub id:         Uuid,
  pub user_id:    Uuid,
  pub company:    Option<String>,
  pub website:    Option<String>,
  pub location:   Option<String>,
  pub bio:        Option<String>,
  pub status:     String,
  pub skills:     Vec<String>,
  #[serde(default)]
  pub social:     SocialLinks,
  #[serde(default)]
  pub experience: Vec<Experience>,
  #[serde(default)]
  pub education:  Vec<Education>,
  pub date:       DateTime<Utc>,
}

impl Profile {
  /// Insert a new entry at the front of the experience list and return it.
  pub fn add_experience(&mut self, input: NewExperience) -> &Experience {
    self.experience.insert(0, Experience {
      id:          Uuid::new_v4(),
      title:       input.title,
      company:     input.company,
      location:    input.location,
      from:        input.from,
      to:          input.to,
      current:     input.current,
      description: input.description,
    });
    &self.experience[0]
  }

  /// Remove the experience entry with `id`. Returns `false` (and changes
  /// nothing) when no entry matches.
  pub fn remove_experience(&mut self, id: Uuid) -> bool {
    match self.experience.iter().position(|e| e.id == id) {
      Some(index) => {
        self.experience.remove(index);
        true
      }
      None => false,
    }
  }

  /// Insert a new entry at the front of the education list and return it.
  pub fn add_education(&mut self, input: NewEducation) -> &Education {
    self.education.insert(0, Education {
      id:           Uuid::new_v4(),
      school:       input.school,
      degree:       input.degree,
      fieldofstudy: input.fieldofstudy,
      from:         input.from,
      to:           input.to,
      current:      input.current,
      description:  input.description,
    });
    &self.education[0]
  }

  /// Remove the education entry with `id`; `false` if none matched.
  pub fn remove_education(&mut self, id: Uuid) -> bool {
    match self.education.iter().position(|e| e.id == id) {
      Some(index) => {
        self.education.remove(index);
        true
      }
      None => false,
    }
  }
}

// ─── Sparse update ───────────────────────────────────────────────────────────

/// The fields submitted to the profile upsert. `None` means "not provided"
/// and never overwrites a stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
  pub company:  Option<String>,
  pub website:  Option<String>,
  pub location: Option<String>,
  pub bio:      Option<String>,
  pub status:   Option<String>,
  pub skills:   Option<Vec<String>>,
  pub social:   SocialLinks,
}

impl ProfileUpdate {
  /// Apply the provided fields to an existing profile.
  pub fn apply(self, profile: &mut Profile) {
    merge_field(&mut profile.company, self.company);
    merge_field(&mut profile.website, self.website);
    merge_field(&mut profile.location, self.location);
    merge_field(&mut profile.bio, self.bio);
    if let Some(status) = self.status {
      profile.status = status;
    }
    if let Some(skills) = self.skills {
      profile.skills = skills;
    }
    profile.social.merge(self.social);
  }

  /// Build a fresh profile for `user_id` from the provided fields.
  pub fn into_profile(self, user_id: Uuid) -> Profile {
    Profile {
      id: Uuid::new_v4(),
      user_id,
      company: self.company,
      website: self.website,
      location: self.location,
      bio: self.bio,
      status: self.status.unwrap_or_default(),
      skills: self.skills.unwrap_or_default(),
      social: self.social,
      experience: Vec::new(),
      education: Vec::new(),
      date: Utc::now(),
    }
  }
}

/// Split a comma-separated skill list into trimmed, non-empty items,
/// preserving order.
pub fn parse_skills(raw: &str) -> Vec<String> {
  raw
    .split(',')
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .map(str::to_owned)
    .collect()
}

/// Parse a calendar date given either as `YYYY-MM-DD` or as an RFC 3339
/// timestamp (truncated to its UTC date).
pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate> {
  let value = value.trim();
  if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
    return Ok(date);
  }
  DateTime::parse_from_rfc3339(value)
    .map(|dt| dt.with_timezone(&Utc).date_naive())
    .map_err(|_| Error::InvalidDate { field, value: value.to_owned() })
}

// ─── Read model ──────────────────────────────────────────────────────────────

/// A profile joined with its owner's display fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileView {
  pub user:    UserSummary,
  #[serde(flatten)]
  pub profile: Profile,
}
