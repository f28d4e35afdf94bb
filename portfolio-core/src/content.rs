//! # Content 模块
//!
//! 站点的静态内容：精选项目、技术栈、合作公司、首屏背景图。
//!
//! 这些数据随代码一起发布，不从外部加载。

use serde::Serialize;

/// 精选项目
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub title: &'static str,
    /// 项目类型
    pub category: &'static str,
    /// 涉及的技术方向
    pub discipline: &'static str,
    pub href: &'static str,
}

/// 掌握的技术
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Technology {
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<&'static str>,
    /// 推荐链接
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<&'static str>,
}

/// 合作过的公司
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Company {
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<&'static str>,
}

/// 瀑布流背景图块
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MasonryItem {
    pub id: &'static str,
    pub img: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<&'static str>,
    /// 高度（像素）
    pub height: u32,
}

const fn project(
    title: &'static str,
    category: &'static str,
    discipline: &'static str,
    href: &'static str,
) -> Project {
    Project {
        title,
        category,
        discipline,
        href,
    }
}

const fn tech(name: &'static str, category: &'static str) -> Technology {
    Technology {
        name,
        category: Some(category),
        href: None,
    }
}

const fn referral(name: &'static str, href: &'static str) -> Technology {
    Technology {
        name,
        category: Some("Tools"),
        href: Some(href),
    }
}

const fn company(name: &'static str, description: &'static str) -> Company {
    Company {
        name,
        description: Some(description),
        href: Some("https://example.com"),
    }
}

const fn tile(id: &'static str, img: &'static str, url: Option<&'static str>, height: u32) -> MasonryItem {
    MasonryItem {
        id,
        img,
        url,
        height,
    }
}

const COMING_SOON: Project = project("Coming Soon...", "Project", "Development", "#");

pub static FEATURED_PROJECTS: &[Project] = &[
    project(
        "Portfolio Website",
        "Personal Portfolio",
        "Full Stack Development",
        "https://github.com/Jack5237/portfolio-website",
    ),
    project("Z3D.AI", "AI Model Maker", "Full Stack Development", "https://z3d.ai"),
    project(
        "Rust-central",
        "Game-Server Management",
        "Full Stack Development",
        "https://rust-central.xyz",
    ),
    project(
        "byte.com - Course Maker",
        "Educational Platform",
        "Full Stack Development",
        "https://byte-com-course-website.onrender.com",
    ),
    project(
        "Imposter Online",
        "Word Imposter Game",
        "Full Stack Development",
        "https://wordimposter.online",
    ),
    COMING_SOON,
    COMING_SOON,
    COMING_SOON,
    COMING_SOON,
];

pub static TECHNOLOGIES: &[Technology] = &[
    tech("TypeScript", "Languages"),
    tech("JavaScript", "Languages"),
    tech("Rust", "Languages"),
    tech("C++", "Languages"),
    tech("C#", "Languages"),
    tech("Kotlin", "Languages"),
    tech("PHP", "Languages"),
    tech("Tailwind CSS", "Languages"),
    tech("HTML", "Languages"),
    tech("CSS", "Languages"),
    tech("Bootstrap", "Languages"),
    tech("SQL", "Languages"),
    tech("Python", "Languages"),
    tech("Java", "Languages"),
    tech("Go", "Languages"),
    tech("Node.js", "Runtime"),
    tech("Next.js", "Frameworks"),
    tech("Hono", "Frameworks"),
    tech("Bhvr.dev", "Frameworks"),
    tech("React", "Frameworks"),
    tech("Express.js", "Frameworks"),
    tech("Django", "Frameworks"),
    tech("Vue.js", "Frameworks"),
    tech("Angular", "Frameworks"),
    tech("Svelte", "Frameworks"),
    tech("Nuxt.js", "Frameworks"),
    tech("Astro", "Frameworks"),
    tech("Remix", "Frameworks"),
    tech("Laravel", "Frameworks"),
    tech("FastAPI", "Frameworks"),
    tech("Supabase", "Databases"),
    tech("NeonDB", "Databases"),
    tech("PostgreSQL", "Databases"),
    tech("MongoDB", "Databases"),
    tech("Docker", "DevOps"),
    tech("Kubernetes", "DevOps"),
    tech("Git", "DevOps"),
    tech("AWS", "Cloud"),
    tech("GCP", "Cloud"),
    tech("Vercel", "Cloud"),
    tech("Render", "Cloud"),
    tech("Fly.io", "Cloud"),
    tech("Azure", "Cloud"),
    tech("REST APIs", "Architecture"),
    tech("GraphQL", "Architecture"),
    tech("Microservices", "Architecture"),
    tech("WebSockets", "Protocols"),
    tech("Message Queues", "Architecture"),
    referral("V0", "https://v0.app/ref/E2QFM5"),
    referral("Convex", "https://convex.dev/referral/JACK264170"),
    referral("WisprFlow", "https://wisprflow.ai/r?JACK742"),
    referral("Warp", "https://app.warp.dev/referral/3WQGY4"),
];

pub static COMPANIES: &[Company] = &[
    company("Tech Startup Alpha", "Built scalable backend infrastructure"),
    company("Enterprise Solutions Inc", "Developed microservices architecture"),
    company("Digital Agency Beta", "Created high-performance APIs"),
    company("FinTech Innovations", "Secure payment processing systems"),
    company("Cloud Services Co", "Infrastructure automation and scaling"),
];

pub static MASONRY_ITEMS: &[MasonryItem] = &[
    tile("1", "https://picsum.photos/id/1015/600/900?grayscale", Some("https://www.afrotype.com/danfo"), 400),
    tile("2", "https://picsum.photos/id/1011/600/750?grayscale", Some("https://www.pithafrica.com/"), 250),
    tile("3", "https://picsum.photos/id/1020/600/800?grayscale", Some("https://2022.madebynull.com/"), 600),
    tile("4", "https://picsum.photos/id/1025/600/500?grayscale", Some("https://fayemi.design/"), 350),
    tile("5", "https://picsum.photos/id/1035/600/700?grayscale", Some("https://paystack.com/terminal/dash/"), 450),
    tile("6", "https://picsum.photos/id/1043/600/600?grayscale", Some("https://www.afrotype.com/tac"), 300),
    tile("7", "https://picsum.photos/id/1048/600/850?grayscale", Some("https://kortyeo.madebynull.com/"), 500),
    tile("8", "https://picsum.photos/id/1050/600/550?grayscale", None, 280),
    tile("9", "https://picsum.photos/id/1052/600/650?grayscale", None, 380),
    tile("10", "https://picsum.photos/id/1060/600/720?grayscale", None, 420),
    tile("11", "https://picsum.photos/id/1062/600/480?grayscale", None, 320),
    tile("12", "https://picsum.photos/id/1067/600/590?grayscale", None, 360),
];

/// 按分类分组技术栈，保持首次出现的顺序
pub fn technologies_by_category() -> Vec<(&'static str, Vec<&'static Technology>)> {
    let mut groups: Vec<(&'static str, Vec<&'static Technology>)> = Vec::new();
    for technology in TECHNOLOGIES {
        let category = technology.category.unwrap_or("Other");
        match groups.iter_mut().find(|(name, _)| *name == category) {
            Some((_, items)) => items.push(technology),
            None => groups.push((category, vec![technology])),
        }
    }
    groups
}

/// 站点内容快照，供宿主序列化输出
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub featured_projects: &'static [Project],
    pub technologies: &'static [Technology],
    pub companies: &'static [Company],
    pub masonry_items: &'static [MasonryItem],
}

impl SiteContent {
    pub fn get() -> Self {
        Self {
            featured_projects: FEATURED_PROJECTS,
            technologies: TECHNOLOGIES,
            companies: COMPANIES,
            masonry_items: MASONRY_ITEMS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_technologies_grouped_in_order() {
        let groups = technologies_by_category();
        let names: Vec<&str> = groups.iter().map(|(name, _)| *name).collect();
        assert_eq!(names[0], "Languages");
        assert_eq!(names.last(), Some(&"Tools"));

        let total: usize = groups.iter().map(|(_, items)| items.len()).sum();
        assert_eq!(total, TECHNOLOGIES.len());
    }

    #[test]
    fn test_masonry_ids_unique() {
        let mut ids: Vec<&str> = MASONRY_ITEMS.iter().map(|item| item.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), MASONRY_ITEMS.len());
    }

    #[test]
    fn test_site_content_serializes_camel_case() {
        let json = serde_json::to_value(SiteContent::get()).unwrap();
        assert!(json["featuredProjects"].is_array());
        assert_eq!(json["masonryItems"][7].get("url"), None);
        assert_eq!(json["technologies"][0]["name"], "TypeScript");
    }
}
