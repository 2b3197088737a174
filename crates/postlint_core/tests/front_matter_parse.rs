use postlint_core::{parse_post, ParseError};

#[test]
fn well_formed_post_parses_with_list_categories() {
    let source = "\
---
layout: post
title: Exploring the Reflection API
author: Dana Writer
categories: [java, reflection]
---

Intro paragraph.
";
    let post = parse_post("exploring-reflection", source).unwrap();
    assert_eq!(post.slug, "exploring-reflection");
    assert_eq!(post.front_matter.layout, "post");
    assert_eq!(post.front_matter.title, "Exploring the Reflection API");
    assert_eq!(post.front_matter.author, "Dana Writer");
    assert_eq!(post.front_matter.categories, vec!["java", "reflection"]);
    assert!(post.body.contains("Intro paragraph."));
    assert_eq!(post.body_start_line, 7);
}

#[test]
fn scalar_categories_are_split_on_whitespace() {
    let source = "\
---
layout: post
title: T
author: A
categories: java reflection tutorial
---
body
";
    let post = parse_post("p", source).unwrap();
    assert_eq!(
        post.front_matter.categories,
        vec!["java", "reflection", "tutorial"]
    );
}

#[test]
fn unknown_metadata_keys_are_ignored() {
    let source = "\
---
layout: post
title: T
author: A
permalink: /posts/t
published: true
---
body
";
    let post = parse_post("p", source).unwrap();
    assert_eq!(post.front_matter.title, "T");
    assert!(post.front_matter.categories.is_empty());
}

#[test]
fn empty_metadata_block_yields_default_fields() {
    let post = parse_post("p", "---\n---\nbody\n").unwrap();
    assert!(post.front_matter.layout.is_empty());
    assert!(post.front_matter.title.is_empty());
    assert!(post.front_matter.author.is_empty());
    assert_eq!(post.body_start_line, 3);
}

#[test]
fn malformed_metadata_is_a_parse_error() {
    let source = "---\nlayout: [unclosed\n---\nbody\n";
    assert!(matches!(
        parse_post("p", source),
        Err(ParseError::Metadata(_))
    ));
}

#[test]
fn body_without_front_matter_is_rejected() {
    assert!(matches!(
        parse_post("p", "# Heading\n\nprose\n"),
        Err(ParseError::MissingFrontMatter)
    ));
}
