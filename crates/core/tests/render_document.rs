use cvmark_core::{BlockKind, RenderOptions, blocks, render, render_with_options};

const POST: &str = "# Building from source

Grab the tarball and unpack it.

```shell
./configure
make
make install
```

- run `make check` first
- **never** skip the tests

> Patches welcome.
> Send them upstream.

![diagram](/img/build.png)";

#[test]
fn post_block_kinds() {
    let kinds: Vec<BlockKind> = blocks(POST).iter().map(|block| block.kind).collect();
    insta::assert_debug_snapshot!(kinds, @r"
    [
        Header,
        Paragraph,
        Code,
        List,
        Quote,
        Image,
    ]
    ");
}

#[test]
fn post_html() {
    insta::assert_debug_snapshot!(
        render(POST),
        @r#""\n<h1> Building from source </h1>\n\n<p>Grab the tarball and unpack it.</p>\n\n<pre lang=\"shell\">\n<code>\n./configure\nmake\nmake install\n</code>\n</pre>\n\n<ul>\n<li>run <code>make check</code> first</li>\n<li><strong>never</strong> skip the tests</li>\n</ul>\n\n<blockquote>Patches welcome.Send them upstream.</blockquote>\n\n<img src=\"/img/build.png\" alt=\"diagram\">\n""#
    );
}

#[test]
fn chinese_post() {
    let input = "## 中文\n\n> 引用 **重点**";
    assert_eq!(
        render(input),
        "\n<h2> 中文 </h2>\n\n<blockquote>引用 <strong>重点</strong></blockquote>\n"
    );
}

#[test]
fn paragraph_inline_opt_in() {
    let input = "See [the docs](https://example.com/docs) for `--help`.";
    assert_eq!(
        render(input),
        "\n<p>See [the docs](https://example.com/docs) for `--help`.</p>\n"
    );

    let options = RenderOptions {
        inline_paragraphs: true,
        ..Default::default()
    };
    assert_eq!(
        render_with_options(input, &options),
        "\n<p>See <a href=\"https://example.com/docs\">the docs</a> for <code>--help</code>.</p>\n"
    );
}

#[test]
fn malformed_markup_degrades_to_text() {
    let input = "#######\n\n![broken](x\n\n- ok\nnope";
    assert_eq!(
        render(input),
        "\n<h6> # </h6>\n\n<p>![broken](x</p>\n\n<p>- ok\nnope</p>\n"
    );
}

#[test]
fn blank_line_runs() {
    let html = render("one\n\n\n\ntwo");
    insta::assert_debug_snapshot!(html, @r#""\n<p>one</p>\n\n<p></p>\n\n<p>two</p>\n""#);
}
