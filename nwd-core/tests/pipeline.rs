use indexmap::IndexMap;
use nwd_core::config::{DiscoveryConfig, LeftBoundary};
use nwd_core::model::corpus_stats::CorpusStats;
use nwd_core::model::discovery::NewWordDiscovery;
use nwd_core::model::ngram_table::NGramTable;
use nwd_core::model::ranker::Ranking;
use nwd_core::model::scorer::ScoreTables;
use nwd_core::report;
use proptest::prelude::*;

fn sequential(max_length: usize) -> DiscoveryConfig {
	DiscoveryConfig { max_length, workers: 1, ..DiscoveryConfig::default() }
}

fn extract(lines: &[String], config: &DiscoveryConfig) -> NGramTable {
	CorpusStats::extract_sequential(lines, config)
}

fn corpus() -> Vec<String> {
	let base = [
		"今天的天气预报说明天有大雨",
		"天气预报准确率越来越高",
		"我们在看天气预报",
		"机器学习和深度学习都是热门方向",
		"深度学习需要大量数据",
		"他在学习机器学习",
		"新词发现是中文分词的重要环节",
		"新词发现依赖统计信息",
	];
	(0..40).map(|i| base[i % base.len()].to_owned()).collect()
}

#[test]
fn repeated_pattern_scenario() {
	let lines = ["abcabcabc"];
	let discovery = NewWordDiscovery::from_lines(&lines, sequential(3)).unwrap();
	let table = discovery.stats().table();

	// Every start position counts: 0, 3 and 6
	assert_eq!(table.frequency("ab"), Some(3));
	assert_eq!(table.frequency("a"), Some(3));

	// The occurrence at 3 sees the 'c' at position 2
	let left = table.left_neighbors().get("ab").unwrap();
	assert_eq!(left.get('c'), 2);

	// Single characters were counted but never ranked
	assert!(discovery.ranking().iter().all(|candidate| candidate.length == 2));
	assert!(discovery.ranking().iter().all(|candidate| candidate.candidate != "a"));
	assert_eq!(discovery.ranking().len(), 3);
}

#[test]
fn identical_runs_are_bit_identical() {
	// Large enough for the chunked extraction path
	let lines: Vec<String> = corpus().into_iter().cycle().take(400).collect();
	let one = NewWordDiscovery::from_lines(&lines, DiscoveryConfig::default()).unwrap();
	let two = NewWordDiscovery::from_lines(&lines, DiscoveryConfig { workers: 3, ..DiscoveryConfig::default() }).unwrap();

	assert_eq!(one.ranking().len(), two.ranking().len());
	for (a, b) in one.ranking().iter().zip(two.ranking().iter()) {
		assert_eq!(a.candidate, b.candidate);
		assert_eq!(a.score.to_bits(), b.score.to_bits());
	}
}

#[test]
fn frequent_words_rank_high() {
	let discovery = NewWordDiscovery::from_lines(&corpus(), DiscoveryConfig::default()).unwrap();
	let top: Vec<&str> = discovery.top_k(4).iter().map(|candidate| candidate.candidate.as_str()).collect();
	assert!(top.contains(&"天气预报") || top.contains(&"机器学习"), "{top:?}");
}

#[test]
fn normalization_invariant_holds() {
	let discovery = NewWordDiscovery::from_lines(&corpus(), DiscoveryConfig::default()).unwrap();
	let stats = discovery.stats();
	assert!(!stats.length_totals().is_empty());
	for (length, total) in stats.length_totals().iter() {
		let sum: u64 = stats
			.table()
			.frequencies()
			.iter()
			.filter(|(word, _)| word.chars().count() == length)
			.map(|(_, count)| *count)
			.sum();
		assert_eq!(sum, total, "length {length}");
	}
}

#[test]
fn single_character_ami_is_zero() {
	let discovery = NewWordDiscovery::from_lines(&corpus(), DiscoveryConfig::default()).unwrap();
	let singles: Vec<(&String, &f64)> =
		discovery.scores().ami.iter().filter(|(word, _)| word.chars().count() == 1).collect();
	assert!(!singles.is_empty());
	assert!(singles.iter().all(|(_, ami)| **ami == 0.0));
}

#[test]
fn entropies_are_bounded_by_distinct_neighbors() {
	let discovery = NewWordDiscovery::from_lines(&corpus(), DiscoveryConfig::default()).unwrap();
	let table = discovery.stats().table();
	let scores = discovery.scores();
	for (neighbors, entropies) in
		[(table.left_neighbors(), &scores.left_entropy), (table.right_neighbors(), &scores.right_entropy)]
	{
		assert_eq!(neighbors.len(), entropies.len());
		for (word, counts) in neighbors.iter() {
			let entropy = entropies[word];
			assert!(entropy >= 0.0);
			assert!(entropy <= (counts.distinct() as f64).log2() + 1e-12);
			assert_eq!(entropy == 0.0, counts.distinct() == 1, "{word}");
		}
	}
}

#[test]
fn top_k_truncation_through_public_api() {
	let map = |entries: &[(&str, f64)]| -> IndexMap<String, f64> {
		entries.iter().map(|(word, value)| ((*word).to_owned(), *value)).collect()
	};
	let scores = ScoreTables {
		ami: map(&[("aa", 0.1), ("bb", 0.5), ("cc", 0.3), ("dd", 0.4), ("ee", 0.2)]),
		left_entropy: IndexMap::new(),
		right_entropy: map(&[("aa", 2.0), ("bb", 2.0), ("cc", 2.0), ("dd", 2.0), ("ee", 2.0)]),
	};
	let ranking = Ranking::rank(["aa", "bb", "cc", "dd", "ee"], &scores, 1e-3);
	let buckets = ranking.buckets(2..3, 2);

	let words: Vec<&str> = buckets[0].candidates.iter().map(|c| c.candidate.as_str()).collect();
	assert_eq!(words, vec!["bb", "dd"]);
	assert!(buckets[0].candidates[0].score > buckets[0].candidates[1].score);
}

#[test]
fn empty_corpus_is_a_valid_run() {
	let lines: Vec<String> = Vec::new();
	let discovery = NewWordDiscovery::from_lines(&lines, DiscoveryConfig::default()).unwrap();
	assert!(discovery.stats().is_empty());
	assert!(discovery.scores().ami.is_empty());
	assert!(discovery.ranking().is_empty());
	assert_eq!(discovery.buckets().len(), 3);
	assert!(discovery.buckets().iter().all(|bucket| bucket.candidates.is_empty()));
}

#[test]
fn symmetric_boundary_sees_more_left_neighbors() {
	let lines = corpus();
	let strict = extract(&lines, &sequential(5));
	let symmetric = extract(&lines, &DiscoveryConfig { left_boundary: LeftBoundary::Symmetric, ..sequential(5) });

	assert_eq!(strict.frequencies(), symmetric.frequencies());
	let total = |table: &NGramTable| -> u64 { table.left_neighbors().iter().map(|(_, counts)| counts.total()).sum() };
	assert!(total(&symmetric) > total(&strict));
}

#[test]
fn corpus_file_to_report() {
	let dir = tempfile::tempdir().unwrap();
	let corpus_path = dir.path().join("corpus.txt");
	std::fs::write(&corpus_path, corpus().join("\n")).unwrap();

	let config = DiscoveryConfig { top_k: 3, ..DiscoveryConfig::default() };
	let discovery = NewWordDiscovery::from_file(&corpus_path, config).unwrap();
	let report_path = nwd_core::io::build_output_path(&corpus_path, "csv").unwrap();
	report::write_csv_file(&report_path, &discovery.buckets()).unwrap();

	let bytes = std::fs::read(&report_path).unwrap();
	let text = String::from_utf8(bytes).unwrap();
	let rows = text.lines().count() - 1;
	assert_eq!(rows, 3 * 3);
}

fn partitioned(lines: &[String], cuts: &[usize]) -> Vec<Vec<String>> {
	let mut cuts: Vec<usize> = cuts.iter().map(|cut| cut % (lines.len() + 1)).collect();
	cuts.sort_unstable();
	let mut chunks = Vec::new();
	let mut start = 0;
	for cut in cuts.into_iter().chain(std::iter::once(lines.len())) {
		chunks.push(lines[start..cut].to_vec());
		start = cut;
	}
	chunks
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(48))]

	#[test]
	fn merging_any_partition_matches_a_single_pass(
		lines in prop::collection::vec("[ab天气 ]{0,12}", 0..16),
		cuts in prop::collection::vec(any::<usize>(), 0..5),
		reverse in any::<bool>(),
	) {
		let config = sequential(5);
		let whole = extract(&lines, &config);

		let mut partials: Vec<NGramTable> =
			partitioned(&lines, &cuts).iter().map(|chunk| extract(chunk, &config)).collect();
		if reverse {
			partials.reverse();
		}

		let mut merged = NGramTable::default();
		for partial in &partials {
			merged.merge(partial);
		}
		prop_assert_eq!(&merged, &whole);

		// Grouping does not matter either: a + (b + c) == (a + b) + c
		if partials.len() >= 3 {
			let mut tail = partials[1].clone();
			for partial in &partials[2..] {
				tail.merge(partial);
			}
			let mut regrouped = partials[0].clone();
			regrouped.merge(&tail);
			prop_assert_eq!(&regrouped, &whole);
		}
	}

	#[test]
	fn in_order_merge_keeps_encounter_order(
		lines in prop::collection::vec("[abc新词]{0,10}", 0..12),
		cuts in prop::collection::vec(any::<usize>(), 0..4),
	) {
		let config = sequential(4);
		let whole = extract(&lines, &config);

		let mut merged = NGramTable::default();
		for chunk in partitioned(&lines, &cuts) {
			merged.merge(&extract(&chunk, &config));
		}
		prop_assert!(merged.frequencies().keys().eq(whole.frequencies().keys()));
	}
}
