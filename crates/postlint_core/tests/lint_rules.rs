use postlint_core::{
    check_front_matter, check_links, lint_post, parse_post, Severity, RULE_CATEGORY,
    RULE_CODE_FENCE, RULE_FRONT_MATTER, RULE_LINK,
};

#[test]
fn clean_tutorial_post_has_no_findings() {
    let source = "\
---
layout: post
title: Exploring the Reflection API
author: Dana Writer
categories: [java, reflection]
---

Reflection lets a program inspect its own classes at runtime. The
[official docs](https://docs.oracle.com/javase/tutorial/reflect/) cover
the full surface; see also the [language spec][jls].

```java
Class<?> clazz = Class.forName(\"java.util.ArrayList\");
for (Method method : clazz.getDeclaredMethods()) {
    System.out.println(method.getName());
}
```

[jls]: https://docs.oracle.com/javase/specs/
";
    let post = parse_post("reflection", source).unwrap();
    assert!(lint_post(&post).is_empty());
}

#[test]
fn missing_required_fields_are_errors() {
    let post = parse_post("p", "---\nlayout: post\n---\nbody\n").unwrap();
    let findings = check_front_matter(&post.front_matter);
    assert_eq!(findings.len(), 2);
    assert!(findings
        .iter()
        .all(|d| d.rule == RULE_FRONT_MATTER && d.severity == Severity::Error));
}

#[test]
fn repeated_category_is_a_warning() {
    let source = "---\nlayout: l\ntitle: t\nauthor: a\ncategories: [Java, java]\n---\nbody\n";
    let post = parse_post("p", source).unwrap();
    let findings = check_front_matter(&post.front_matter);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].rule, RULE_CATEGORY);
    assert_eq!(findings[0].severity, Severity::Warning);
    assert!(findings[0].message.contains("java"));
}

#[test]
fn unclosed_fence_reports_the_source_line() {
    let source = "\
---
layout: l
title: t
author: a
---
prose

```java
int x = 1;
";
    let post = parse_post("p", source).unwrap();
    let findings = lint_post(&post);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].rule, RULE_CODE_FENCE);
    // The opener sits on line 8 of the original file.
    assert_eq!(findings[0].line, Some(8));
}

#[test]
fn empty_inline_url_is_reported_with_its_line() {
    let source = "\
---
layout: l
title: t
author: a
---
See [the docs]() for details.
";
    let post = parse_post("p", source).unwrap();
    let findings = lint_post(&post);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].rule, RULE_LINK);
    assert_eq!(findings[0].line, Some(6));
    assert!(findings[0].message.contains("the docs"));
}

#[test]
fn unresolved_and_empty_reference_links_are_reported() {
    let body = "\
Start with [the intro][intro] and then [the missing part][nowhere].

[intro]:
[other]: https://example.com/other
";
    let findings = check_links(body, 1);
    assert_eq!(findings.len(), 2);
    assert!(findings[0].message.contains("intro"));
    assert!(findings[0].message.contains("empty URL"));
    assert!(findings[1].message.contains("nowhere"));
    assert!(findings[1].message.contains("no definition"));
}

#[test]
fn collapsed_reference_links_match_their_text() {
    let body = "Read [JLS][] before arguing.\n\n[jls]: https://docs.oracle.com/javase/specs/\n";
    assert!(check_links(body, 1).is_empty());
}

#[test]
fn link_syntax_inside_code_fences_is_not_linted() {
    let body = "\
```markdown
[broken]()
[nope][missing]
```
prose after the sample
";
    assert!(check_links(body, 1).is_empty());
}

#[test]
fn findings_keep_a_stable_rule_order() {
    let source = "\
---
layout: l
title:
author: a
---
[bad]()

```java
unterminated
";
    let post = parse_post("p", source).unwrap();
    let rules: Vec<&str> = lint_post(&post).iter().map(|d| d.rule).collect();
    assert_eq!(rules, vec![RULE_FRONT_MATTER, RULE_CODE_FENCE, RULE_LINK]);
}
