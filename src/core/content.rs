// Static portfolio content shown by the overlays. Immutable, built in.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanetPayload {
    pub title: &'static str,
    pub role: &'static str,
    pub timeline: &'static str,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SunPayload {
    pub name: &'static str,
    pub tagline: &'static str,
    pub summary: &'static str,
    pub affiliation: &'static str,
    pub email: &'static str,
    pub linkedin: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectPayload {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub highlights: &'static [&'static str],
    pub url: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Channel {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub color: &'static str,
}

pub const RESUME_URL: &str =
    "https://drive.google.com/file/d/1n1ycuPIkyrWHXzguZ73RXO379E6dkbP7/view?usp=sharing";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/akhilnampally/";
pub const GITHUB_URL: &str = "https://github.com/akhilnam";

pub const SUN: SunPayload = SunPayload {
    name: "Akhil Nampally",
    tagline: "Software Engineer & AI Researcher",
    summary: "Software Engineer & AI Researcher passionate about building intelligent systems that solve real-world problems.",
    affiliation: "Georgia Tech | CS + Math | Researcher | Builder",
    email: "anampally3@gatech.edu",
    linkedin: "https://linkedin.com/in/akhilnampally",
};

pub const LAB: PlanetPayload = PlanetPayload {
    title: "Living Dynamical Systems Lab",
    role: "Undergraduate Researcher",
    timeline: "Aug 2024 to Present",
    description: "Engineering and modeling real-world biological systems through smart hardware and AI. Built a real-time data acquisition + visualization pipeline for a capacitive sensor system, cutting calibration time by 75% and enabling more precise experiments.",
    highlights: &[
        "Real-time data processing",
        "Hardware-software integration",
        "AI modeling",
    ],
};

pub const STRATEGY_KILN: PlanetPayload = PlanetPayload {
    title: "Strategy Kiln",
    role: "Analyst Intern",
    timeline: "May 2024 – Sept 2024",
    description: "Worked at the intersection of data and strategy, managing $65M in CRM leads and building automated pipelines that boosted conversion by 25%. Used SQL + Python to segment users, forecast trends, and guide client growth.",
    highlights: &[
        "$65M CRM management",
        "25% conversion boost",
        "Automated pipelines",
    ],
};

pub const GEORGIA_TECH: PlanetPayload = PlanetPayload {
    title: "Georgia Tech",
    role: "Undergraduate Student",
    timeline: "2022 - Present",
    description: "Exploring the intersection of computation, data, and intelligent systems. Deep dives into AI, robotics, and optimization, with ideas brought to life through projects, research, and rapid iteration.",
    highlights: &[
        "CS + Math Double Major",
        "AI & Robotics Focus",
        "Research Experience",
    ],
};

pub const PROJECTS: [ProjectPayload; 6] = [
    ProjectPayload {
        title: "PhantomShield",
        description: "Real-time deepfake detection tool",
        tech: &["PyTorch", "Electron.js", "OpenCV"],
        highlights: &["85% accuracy", "live video monitoring UI"],
        url: "https://github.com/akhilnam/phantomshield",
    },
    ProjectPayload {
        title: "EV-Arb Tool",
        description: "Sports betting prop evaluator",
        tech: &["Python", "FastAPI", "React"],
        highlights: &["Analyzes 10k+ props daily", "full-stack dashboard"],
        url: "https://github.com/akhilnam/ev-arb-tool",
    },
    ProjectPayload {
        title: "Pet Mood Detection",
        description: "CV project for classifying dog breeds",
        tech: &["TensorFlow", "OpenCV"],
        highlights: &["MobileNetV2", "data augmentation", "85% accuracy"],
        url: "https://github.com/AkhilNam/DogBreedPrediction",
    },
    ProjectPayload {
        title: "ROS Autonomous Robot",
        description: "Simulated SLAM + path planning bot",
        tech: &["Python", "ROS", "Gazebo"],
        highlights: &["Multi-goal routing", "TF debugging", "RViz visualization"],
        url: "https://github.com/AkhilNam/ros-autonomous-navigation",
    },
    ProjectPayload {
        title: "BiasScope",
        description: "Real-time media bias detector",
        tech: &["Python", "React", "Sonar API"],
        highlights: &["AI-powered source comparison", "tone analysis"],
        url: "https://github.com/akhilnam/biasscope",
    },
    ProjectPayload {
        title: "ScholarGrind",
        description: "Study assistant with LLM + calendar sync",
        tech: &["Django", "PostgreSQL", "Google Calendar API", "OpenAI API"],
        highlights: &["Smart scheduling", "AI-powered study recommendations"],
        url: "https://github.com/svkapoor/scholargrind",
    },
];

pub const CHANNELS: [Channel; 5] = [
    Channel {
        id: "email",
        name: "Quantum Email",
        description: "anampally3@gatech.edu",
        link: "mailto:anampally3@gatech.edu",
        color: "#4F46E5",
    },
    Channel {
        id: "linkedin",
        name: "Professional Network",
        description: "Connect through the professional cosmos",
        link: "https://linkedin.com/in/akhilnampally",
        color: "#0077B5",
    },
    Channel {
        id: "github",
        name: "Code Repository",
        description: "Explore collaborative development space",
        link: GITHUB_URL,
        color: "#333333",
    },
    Channel {
        id: "website",
        name: "Personal Portal",
        description: "Visit my digital home in the cosmos",
        link: "https://akhilnam.xyz",
        color: "#1DA1F2",
    },
    Channel {
        id: "resume",
        name: "Digital Dossier",
        description: "Access my comprehensive profile archive",
        link: RESUME_URL,
        color: "#00C4A7",
    },
];

/// Minimal escaping for text interpolated into overlay markup.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
