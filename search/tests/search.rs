use pinsou_search::{MultipleMode, SearchOptions, SortMode, search, search_by};

fn raw() -> SearchOptions {
    SearchOptions::default().with_sort(SortMode::Raw)
}

fn any(separator: &str) -> SearchOptions {
    SearchOptions::default()
        .with_multiple(MultipleMode::Any)
        .with_separator(separator)
}

fn run<'a>(query: &str, items: &[&'a str], options: &SearchOptions) -> Vec<&'a str> {
    search(query, items, options).into_iter().copied().collect()
}

const MIXED: [&str; 6] = ["是的", "我的", "是我的", "是的我", "不是我的", "是不我的"];

mod multiple {
    use super::*;

    #[test]
    fn test_any_returns_partial_hits() {
        let options = any(" ").with_sort(SortMode::Raw);
        assert_eq!(run("是 的", &["的", "是1", "2"], &options), vec!["的", "是1"]);
    }

    #[test]
    fn test_all_is_default() {
        let items = ["是的", "是我的", "是吧"];
        let expected = vec!["是的", "是我的"];

        assert_eq!(run("是 的", &items, &raw()), expected);
        assert_eq!(
            run("是 的", &items, &raw().with_multiple(MultipleMode::All)),
            expected
        );
    }

    #[test]
    fn test_any_is_superset_of_all() {
        let items = ["北京市", "天津市", "上海市", "南京市长江大桥"];
        let all = run("bj shi", &items, &raw());
        let any = run("bj shi", &items, &raw().with_multiple(MultipleMode::Any));

        assert!(all.iter().all(|item| any.contains(item)));
        assert_eq!(all, vec!["北京市"]);
        assert_eq!(any.len(), 4);
    }
}

mod sort {
    use super::*;

    #[test]
    fn test_raw_keeps_input_order() {
        assert_eq!(run("是", &["是3", "是1", "是2"], &raw()), vec!["是3", "是1", "是2"]);
    }

    #[test]
    fn test_auto_then_alphabetical() {
        let items = ["是的2", "是的", "是的1"];
        let expected = vec!["是的", "是的1", "是的2"];

        assert_eq!(run("是的", &items, &SearchOptions::default()), expected);
        assert_eq!(
            run("是的", &items, &SearchOptions::default().with_sort(SortMode::Auto)),
            expected
        );
    }

    #[test]
    fn test_auto_prefers_adjacent_matches() {
        let result = run("sx", &["四川省", "山西省", "陕西省"], &SearchOptions::default());
        assert_eq!(result, vec!["山西省", "陕西省", "四川省"]);
    }

    #[test]
    fn test_ascending() {
        let options = SearchOptions::default().with_sort(SortMode::Ascending);
        assert_eq!(
            run("是的", &["是的2", "是的", "是的1"], &options),
            vec!["是的", "是的1", "是的2"]
        );
    }

    #[test]
    fn test_descending() {
        let options = SearchOptions::default().with_sort(SortMode::Descending);
        assert_eq!(
            run("是的", &["是的2", "是的", "是的1"], &options),
            vec!["是的2", "是的1", "是的"]
        );
    }
}

mod separator {
    use super::*;

    #[test]
    fn test_comma() {
        let items = ["是我的", "是 的", "是,的", "是 ,我的"];
        let options = raw().with_separator(",");
        assert_eq!(run("是 ,的", &items, &options), items.to_vec());
    }

    #[test]
    fn test_space_is_default() {
        let items = ["是的", "是我的", "的吧"];
        let expected = vec!["是的", "是我的"];

        assert_eq!(run("是 的", &items, &raw().with_separator(" ")), expected);
        assert_eq!(run("是 的", &items, &raw()), expected);
    }
}

mod matching {
    use super::*;

    #[test]
    fn test_exact_chinese() {
        assert_eq!(run("是张三", &["是张三", "是李四"], &SearchOptions::default()), vec!["是张三"]);
    }

    #[test]
    fn test_scattered_chinese() {
        assert_eq!(run("是三", &["是张三", "是李四"], &SearchOptions::default()), vec!["是张三"]);
    }

    #[test]
    fn test_pinyin_mixed_with_chinese_and_latin() {
        assert_eq!(run("是zs", &["是张三hi", "是李四ha"], &SearchOptions::default()), vec!["是张三hi"]);
    }

    #[test]
    fn test_pinyin_initials() {
        assert_eq!(run("zs", &["是张三", "是李四"], &SearchOptions::default()), vec!["是张三"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(run("404", &["是张三", "是李四"], &SearchOptions::default()).is_empty());
    }

    #[test]
    fn test_multiple_words() {
        assert_eq!(run("张,ls", &["是张三", "是李四"], &any(",")), vec!["是张三", "是李四"]);
    }

    #[test]
    fn test_initials_per_word() {
        let items = ["北京市", "天津市", "浙江省", "山西省", "上海市", "河北省"];
        assert_eq!(run("bj,tj,shs", &items, &any(",")), vec!["北京市", "天津市", "上海市"]);
    }

    #[test]
    fn test_polyphonic_characters() {
        let items = ["是的", "使得", "似的", "师德", "好的", "湿地"];
        assert_eq!(run("sdi", &items, &raw()), vec!["是的", "似的", "湿地"]);
    }

    #[test]
    fn test_polyphonic_initials() {
        let items = ["南京市长江大桥", "南京市长", "长江大桥", "东躲西藏", "西藏"];

        assert_eq!(
            run("njszj,ddxz", &items, &any(",")),
            vec!["南京市长江大桥", "东躲西藏"]
        );
        assert_eq!(
            run("njscj,xc", &items, &any(",").with_sort(SortMode::Raw)),
            vec!["南京市长江大桥", "东躲西藏", "西藏"]
        );
    }

    #[test]
    fn test_chinese_pinyin_mix() {
        let expected = vec!["是我的", "不是我的", "是不我的"];
        for query in ["是我de", "是wo的", "shi我的", "shi我de"] {
            assert_eq!(run(query, &MIXED, &raw()), expected, "query {query}");
        }
        assert!(run("si我de", &MIXED, &raw()).is_empty());
    }

    #[test]
    fn test_chinese_initials_mix() {
        let expected = vec!["是我的", "不是我的", "是不我的"];
        for query in ["是我d", "是w的", "s我的", "s我d"] {
            assert_eq!(run(query, &MIXED, &raw()), expected, "query {query}");
        }
    }

    #[test]
    fn test_codes() {
        let names = ["张三01", "张三02", "张三03", "李四01", "李四02", "王五03"];
        assert_eq!(run("zhangsan01", &names, &raw()), vec!["张三01"]);
        assert_eq!(run("zs01", &names, &raw()), vec!["张三01"]);

        let latin = ["zhangsan01", "zhangsan02", "zhangsan03", "lisi01", "lisi02", "wangwu03"];
        assert_eq!(
            run("zhangsan", &latin, &raw()),
            vec!["zhangsan01", "zhangsan02", "zhangsan03"]
        );
        assert_eq!(run("zhangsan01", &latin, &raw()), vec!["zhangsan01"]);
        assert_eq!(run("zs01", &latin, &raw()), vec!["zhangsan01"]);
    }

    #[test]
    fn test_long_list() {
        let list = [
            "石室诗士施氏",
            "嗜狮",
            "誓食十狮",
            "施氏时时适市视狮",
            "十时",
            "适十狮适市",
            "是时",
            "适施氏适市",
            "施氏视是十狮",
            "恃矢势",
            "使是十狮逝世",
            "氏拾是十狮尸",
            "适石室",
            "石室湿",
            "氏使侍拭石室",
            "石室拭",
            "施氏始试食是十狮尸",
            "食时",
            "始识是十狮尸",
            "实十石狮尸",
            "试释是事",
        ];
        let items: Vec<String> = (0..list.len() * 100)
            .map(|i| format!("{}{}", list[i % list.len()], i))
            .collect();

        let result: Vec<String> = search("shishi", &items, &raw()).into_iter().cloned().collect();
        assert_eq!(result, items);
    }

    #[test]
    fn test_english() {
        let items = [
            "Not Identified",
            "Closed",
            "Communicated",
            "Identified",
            "Resolved",
            "Cancelled",
        ];
        assert_eq!(
            run("de", &items, &SearchOptions::default()),
            vec!["Identified", "Not Identified"]
        );
    }

    #[test]
    fn test_numbers() {
        let items = [1, 2, 3, 4];
        assert_eq!(search("1", &items, &SearchOptions::default()), vec![&1]);
    }

    #[test]
    fn test_text_provider() {
        #[derive(Debug, PartialEq)]
        struct Person {
            name: &'static str,
            id: u32,
        }

        let people = [
            Person { name: "是张三", id: 1 },
            Person { name: "是李四", id: 2 },
        ];
        let result = search_by("ls", &people, &SearchOptions::default(), |p| p.name.to_string());
        assert_eq!(result, vec![&people[1]]);
        assert_eq!(result[0].id, 2);
    }
}

mod properties {
    use super::*;

    const ITEMS: [&str; 8] = ["北京市", "天津市", "上海市", "山西省", "陕西省", "是张三", "Identified", "张三01"];

    #[test]
    fn test_exact_text_is_found() {
        for item in ITEMS {
            assert!(run(item, &ITEMS, &SearchOptions::default()).contains(&item), "{item}");
        }
    }

    #[test]
    fn test_raw_is_subsequence_in_order() {
        for query in ["s", "sx", "zs", "市", "sh x", "d"] {
            let result = run(query, &ITEMS, &raw());
            let positions: Vec<usize> = result
                .iter()
                .map(|hit| ITEMS.iter().position(|item| item == hit).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "{query}: {result:?}");
        }
    }

    #[test]
    fn test_idempotent() {
        for query in ["s", "bj tj", "zs01", "是"] {
            let first = run(query, &ITEMS, &SearchOptions::default());
            let second = run(query, &ITEMS, &SearchOptions::default());
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_no_duplicates() {
        let result = run("s,sh,是,shi", &ITEMS, &any(","));
        let mut unique = result.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), result.len());
    }
}
