//! Static page content.
//!
//! Every literal string shown on the landing page lives here, in display
//! order, so the components, the JSON manifest and the tests all read the
//! same tables.
//!
//! # Example
//!
//! ```rust
//! use codementor_page::content::{FEATURES, STATS};
//!
//! assert_eq!(FEATURES.len(), 6);
//! assert_eq!(STATS[0].value, "10,000+");
//! ```

use serde::Serialize;

use crate::components::IconGlyph;

/// Document title shown in the browser tab and search results.
pub const PAGE_TITLE: &str = "CodeMentor AI - 智能编程导师";

/// Value of `<meta name="description">`.
pub const PAGE_DESCRIPTION: &str = "基于AI的个性化编程学习平台";

/// Product name used in the nav bar, hero and footer.
pub const BRAND_NAME: &str = "CodeMentor AI";

/// Hero headline (the brand name follows it, highlighted).
pub const HERO_HEADLINE: &str = "智能编程导师";

/// Hero lead paragraph.
pub const HERO_LEAD: &str = "基于人工智能的个性化编程学习平台，为您提供智能化的代码分析、个性化学习路径和实时编程指导，让编程学习更高效、更有趣。";

/// Feature grid heading.
pub const FEATURES_HEADING: &str = "强大的学习功能";
/// Line under the feature grid heading.
pub const FEATURES_SUBHEADING: &str = "全方位的编程学习支持，助您快速提升编程技能";

/// Closing call-to-action heading.
pub const CTA_HEADING: &str = "开始您的编程学习之旅";
/// Closing call-to-action text.
pub const CTA_TEXT: &str = "加入我们，体验AI驱动的个性化编程学习";

/// Footer brand block tagline.
pub const FOOTER_TAGLINE: &str = "智能编程导师，让编程学习更简单、更高效。";

/// Footer copyright line.
pub const COPYRIGHT: &str = "© 2024 CodeMentor AI. 保留所有权利。";

/// One marketed capability: icon, title and description.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FeatureDescriptor {
    /// Glyph drawn above the title
    pub icon: IconGlyph,
    /// Card title
    pub title: &'static str,
    /// Card body text
    pub description: &'static str,
}

/// The feature grid, in display order.
pub const FEATURES: [FeatureDescriptor; 6] = [
    FeatureDescriptor {
        icon: IconGlyph::CodeBracket,
        title: "智能代码分析",
        description: "深度分析代码质量，提供详细的改进建议和最佳实践指导。",
    },
    FeatureDescriptor {
        icon: IconGlyph::AcademicCap,
        title: "个性化学习路径",
        description: "根据您的水平和目标，制定专属的学习计划和进度跟踪。",
    },
    FeatureDescriptor {
        icon: IconGlyph::ChartBar,
        title: "学习进度跟踪",
        description: "实时监控学习进度，提供数据可视化的学习报告。",
    },
    FeatureDescriptor {
        icon: IconGlyph::RocketLaunch,
        title: "项目实战指导",
        description: "引导您完成实际项目开发，从理论到实践的完整学习体验。",
    },
    FeatureDescriptor {
        icon: IconGlyph::UserGroup,
        title: "社区互动",
        description: "与其他学习者交流经验，分享代码，共同进步。",
    },
    FeatureDescriptor {
        icon: IconGlyph::Cog,
        title: "智能推荐",
        description: "基于AI算法，推荐最适合您的学习内容和练习题目。",
    },
];

/// A headline figure in the stats banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Stat {
    /// Large figure, e.g. `"95%"`
    pub value: &'static str,
    /// Caption under the figure
    pub label: &'static str,
}

/// The stats banner, in display order.
pub const STATS: [Stat; 4] = [
    Stat {
        value: "10,000+",
        label: "活跃学习者",
    },
    Stat {
        value: "50,000+",
        label: "代码分析",
    },
    Stat {
        value: "95%",
        label: "用户满意度",
    },
    Stat {
        value: "24/7",
        label: "AI在线指导",
    },
];

/// Visual weight of a button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    /// Filled indigo
    Primary,
    /// Indigo outline
    Secondary,
    /// Text only
    Ghost,
}

impl Emphasis {
    /// CSS class for this emphasis.
    pub fn class(self) -> &'static str {
        match self {
            Emphasis::Primary => "btn btn-primary",
            Emphasis::Secondary => "btn btn-secondary",
            Emphasis::Ghost => "btn btn-ghost",
        }
    }
}

/// An inert button.
///
/// No behavior is attached on this page; `action` is emitted as a
/// `data-action` attribute so routing or auth can be wired from outside.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CallToAction {
    /// Visible label
    pub label: &'static str,
    /// Stable hook name (kebab-case)
    pub action: &'static str,
    /// Button style
    pub emphasis: Emphasis,
}

/// Nav bar login button.
pub const NAV_LOGIN: CallToAction = CallToAction {
    label: "登录",
    action: "login",
    emphasis: Emphasis::Ghost,
};

/// Nav bar primary button.
pub const NAV_START: CallToAction = CallToAction {
    label: "开始学习",
    action: "start-learning",
    emphasis: Emphasis::Primary,
};

/// Hero primary button.
pub const HERO_START: CallToAction = CallToAction {
    label: "立即开始",
    action: "get-started",
    emphasis: Emphasis::Primary,
};

/// Hero secondary button.
pub const HERO_LEARN_MORE: CallToAction = CallToAction {
    label: "了解更多",
    action: "learn-more",
    emphasis: Emphasis::Secondary,
};

/// Closing block register button.
pub const CTA_REGISTER: CallToAction = CallToAction {
    label: "免费注册",
    action: "register",
    emphasis: Emphasis::Primary,
};

/// Every button on the page, in document order.
pub const CALLS_TO_ACTION: [CallToAction; 5] =
    [NAV_LOGIN, NAV_START, HERO_START, HERO_LEARN_MORE, CTA_REGISTER];

/// A titled column of footer items.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LinkGroup {
    /// Column heading
    pub heading: &'static str,
    /// Items, top to bottom
    pub items: &'static [&'static str],
}

/// Footer link groups, left to right (after the brand block).
pub const FOOTER_GROUPS: [LinkGroup; 3] = [
    LinkGroup {
        heading: "产品",
        items: &["代码分析", "学习路径", "项目指导"],
    },
    LinkGroup {
        heading: "支持",
        items: &["帮助中心", "联系我们", "常见问题"],
    },
    LinkGroup {
        heading: "社区",
        items: &["开发者论坛", "代码分享", "学习小组"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_features_with_copy() {
        assert_eq!(FEATURES.len(), 6);
        for feature in &FEATURES {
            assert!(!feature.title.is_empty());
            assert!(!feature.description.is_empty());
        }
        let titles: Vec<_> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(
            titles,
            [
                "智能代码分析",
                "个性化学习路径",
                "学习进度跟踪",
                "项目实战指导",
                "社区互动",
                "智能推荐"
            ]
        );
    }

    #[test]
    fn feature_titles_are_unique() {
        let mut titles: Vec<_> = FEATURES.iter().map(|f| f.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), FEATURES.len());
    }

    #[test]
    fn stats_pair_value_and_label() {
        let pairs: Vec<_> = STATS.iter().map(|s| (s.label, s.value)).collect();
        assert_eq!(
            pairs,
            [
                ("活跃学习者", "10,000+"),
                ("代码分析", "50,000+"),
                ("用户满意度", "95%"),
                ("AI在线指导", "24/7"),
            ]
        );
    }

    #[test]
    fn footer_groups_fixed() {
        let headings: Vec<_> = FOOTER_GROUPS.iter().map(|g| g.heading).collect();
        assert_eq!(headings, ["产品", "支持", "社区"]);
        assert!(FOOTER_GROUPS.iter().all(|g| g.items.len() == 3));
        assert!(COPYRIGHT.contains("2024 CodeMentor AI"));
    }

    #[test]
    fn cta_actions_unique() {
        let mut actions: Vec<_> = CALLS_TO_ACTION.iter().map(|c| c.action).collect();
        actions.sort_unstable();
        actions.dedup();
        assert_eq!(actions.len(), CALLS_TO_ACTION.len());
    }
}
