// UI Components
// Reusable pieces of the talent profile and listing pages

pub mod icons;
pub mod talent_avatar;
pub mod experience_entry;
pub mod certificate_list;
pub mod profile_view;
pub mod not_found_panel;

pub use talent_avatar::TalentAvatar;
pub use experience_entry::ExperienceEntry;
pub use certificate_list::CertificateList;
pub use profile_view::ProfileView;
pub use not_found_panel::NotFoundPanel;
