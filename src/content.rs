//! Static portfolio content shown in the site modals. Plain records with
//! `'static` strings so components can borrow freely.

pub struct Biodata {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub skills: &'static [&'static str],
}

pub struct Job {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
}

pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
}

pub struct Contact {
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
}

pub static BIODATA: Biodata = Biodata {
    name: "Zaki Elyasa Djauhari",
    role: "Full Stack Developer",
    bio: "Passionate developer creating amazing digital experiences. Highly \
          curious and fast-learning software engineer. Calm under pressure \
          and committed to continuous improvement. Enjoys sharing knowledge, \
          collaborating with teams, and adapting quickly to new technologies.",
    skills: &[
        "HTML",
        "CSS",
        "Javascript",
        "Typescript",
        "React",
        "Next.js",
        "Node.js",
        "Nest.js",
        "Java",
        "SpringBoot",
        "PostgreSQL",
        "RabbitMQ",
        "Git",
    ],
};

pub static EXPERIENCE: [Job; 4] = [
    Job {
        title: "Freelance Full Stack Developer",
        company: "PT. Etos Indonusa",
        period: "2025 - present",
    },
    Job {
        title: "Full Stack Developer",
        company: "PT. Tiga Daya Digital",
        period: "2022 - 2025",
    },
    Job {
        title: "Frontend Developer",
        company: "PT. Eigen Tri Mathema",
        period: "2020 - 2022",
    },
    Job {
        title: "Frontend Developer",
        company: "PT. HolaHalo Mekar Konsep",
        period: "2020 - 2020",
    },
];

pub static PROJECTS: [Project; 3] = [
    Project {
        name: "SPEED Dashboard for PT. Autopedia Sukses Lestari",
        description: "Dashboard for PT. Autopedia Sukses Lestari",
        tech: &["Next.js", "Bootstrap", "Typescript"],
    },
    Project {
        name: "GAINS Application for PT. Autopedia Sukses Gadai",
        description: "Application for PT. Autopedia Sukses Gadai",
        tech: &[
            "Java",
            "Spring Boot",
            "HTML",
            "CSS",
            "Javascript",
            "Jquery",
            "RabbitMQ",
            "PostgreSQL",
        ],
    },
    Project {
        name: "PT. Siap Textile",
        description: "Landing Page for PT. Siap Textile",
        tech: &["HTML", "CSS", "JavaScript", "React"],
    },
];

pub static CONTACT: Contact = Contact {
    email: "zakielyasadj@gmail.com",
    github: "github.com/zedomaru",
    linkedin: "www.linkedin.com/in/zaki-elyasa-djauhari-20095a134/",
};

/// Served from the asset directory next to the sprite sheets.
pub static CV_FILE: &str = "CV_Zaki_Elyasa_Djauhari_-_Software_Engineer.pdf";
