use crate::catalog::RoleProfile;
use crate::models::skill::SkillSet;

struct RoleSeed {
    id: &'static str,
    name: &'static str,
    summary: &'static str,
    required: &'static [&'static str],
    preferred: &'static [&'static str],
    interests: &'static [&'static str],
}

const ROLES: &[RoleSeed] = &[
    RoleSeed {
        id: "swe",
        name: "Software Engineer",
        summary: "Design, build and ship software systems and applications.",
        required: &["Data Structures", "Algorithms", "Git", "Problem Solving"],
        preferred: &["JavaScript", "Python", "Java", "SQL", "APIs", "Cloud Computing"],
        interests: &["Web Development", "Mobile Apps", "Gaming", "Fintech"],
    },
    RoleSeed {
        id: "data-analyst",
        name: "Data Analyst",
        summary: "Turn raw data into insights that guide business decisions.",
        required: &["SQL", "Excel", "Data Visualization", "Statistics"],
        preferred: &["Python", "Tableau", "Communication"],
        interests: &["Data & Analytics", "Fintech"],
    },
    RoleSeed {
        id: "data-scientist",
        name: "Data Scientist",
        summary: "Build predictive models and experiments on top of data.",
        required: &["Python", "Statistics", "Machine Learning", "SQL"],
        preferred: &["Data Visualization", "Deep Learning", "Cloud Computing"],
        interests: &["AI / Machine Learning", "Data & Analytics", "Robotics"],
    },
    RoleSeed {
        id: "cybersecurity",
        name: "Cybersecurity Analyst",
        summary: "Protect systems and data from threats and vulnerabilities.",
        required: &["Networking", "Linux", "Security Fundamentals"],
        preferred: &["Python", "Incident Response", "Cloud Computing"],
        interests: &["Cybersecurity", "Cloud / DevOps"],
    },
    RoleSeed {
        id: "product-manager",
        name: "Product Manager",
        summary: "Decide what gets built and why, and align teams around it.",
        required: &["Communication", "User Research", "Prioritization"],
        preferred: &["SQL", "Data Visualization", "Agile"],
        interests: &["Product Management", "Social Impact", "Fintech"],
    },
    RoleSeed {
        id: "ux-designer",
        name: "UX Designer",
        summary: "Shape how products look, feel and work for their users.",
        required: &["User Research", "Wireframing", "Prototyping"],
        preferred: &["Figma", "HTML/CSS", "Communication"],
        interests: &["UX / Design", "Web Development", "Mobile Apps"],
    },
    RoleSeed {
        id: "cloud-devops",
        name: "Cloud / DevOps Engineer",
        summary: "Automate, deploy and operate infrastructure at scale.",
        required: &["Linux", "Cloud Computing", "Git", "Scripting"],
        preferred: &["Docker", "Kubernetes", "Networking", "Python"],
        interests: &["Cloud / DevOps", "Cybersecurity"],
    },
];

pub fn roles() -> Vec<RoleProfile> {
    ROLES
        .iter()
        .map(|seed| RoleProfile {
            role_id: seed.id.to_string(),
            name: seed.name.to_string(),
            summary: seed.summary.to_string(),
            required_skills: SkillSet::from_labels(seed.required),
            preferred_skills: SkillSet::from_labels(seed.preferred),
            related_interests: seed.interests.iter().map(|i| i.to_string()).collect(),
        })
        .collect()
}
