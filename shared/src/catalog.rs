//! Department and position choices offered by the creation form.
//!
//! Both sets are open: the API stores whatever string it receives.

pub const DEPARTMENTS: &[&str] = &[
    "Développement",
    "Design",
    "Marketing",
    "Infrastructure",
    "RH",
    "Commercial",
];

pub const POSITIONS: &[&str] = &[
    "Lead Developer",
    "Full Stack Developer",
    "Frontend Developer",
    "Backend Developer",
    "DevOps Engineer",
    "UX Designer Senior",
    "Product Designer",
    "Marketing Manager",
    "DRH",
    "Account Executive",
];
