use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chess_compression::huffman::coder::default_coder;
use chess_compression::move_rank::decoder::decode_game;
use chess_compression::move_rank::encoder::encode_game;
use chess_compression::position_pack::CompressedPosition;
use shakmaty::{san::San, Chess, Position};

struct BenchCase {
    name: &'static str,
    moves: &'static [&'static str],
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "sicilian_12",
        moves: &[
            "e4", "c5", "Nf3", "d6", "Bb5+", "Bd7", "Bxd7+", "Nxd7", "O-O", "Ngf6", "Re1", "e6",
        ],
    },
    BenchCase {
        name: "sicilian_64",
        moves: &[
            "e4", "c5", "Nf3", "d6", "Bb5+", "Bd7", "Bxd7+", "Nxd7", "O-O", "Ngf6", "Re1", "e6",
            "d4", "cxd4", "Nxd4", "Be7", "c4", "a6", "Nc3", "O-O", "Be3", "Rc8", "b3", "e5", "Nf5",
            "b5", "Nxd6", "Bxd6", "Qxd6", "bxc4", "b4", "a5", "a3", "Re8", "Rad1", "Re6", "Qd2",
            "Rb8", "Bg5", "Qb6", "Be3", "Qb7", "f3", "axb4", "axb4", "Qxb4", "Rb1", "Qd6", "Rxb8+",
            "Qxb8", "Rb1", "Qc7", "Nd5", "Nxd5", "exd5", "Rd6", "f4", "c3", "Qc2", "Rxd5", "fxe5",
            "Nxe5", "Qxc3", "h6",
        ],
    },
];

fn game_codec_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("game_codec");
    for case in CASES {
        group.throughput(Throughput::Elements(case.moves.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("encode", case.name),
            case.moves,
            |b, moves| b.iter(|| encode_game(black_box(moves)).unwrap()),
        );

        let bytes = encode_game(case.moves).unwrap();
        group.bench_with_input(
            BenchmarkId::new("decode", case.name),
            &bytes,
            |b, bytes| {
                b.iter(|| decode_game(black_box(bytes), Some(case.moves.len())).unwrap())
            },
        );
    }
    group.finish();
}

fn position_benchmark(c: &mut Criterion) {
    let mut position = Chess::default();
    for san in CASES[1].moves.iter().take(24) {
        let mv = san.parse::<San>().unwrap().to_move(&position).unwrap();
        position.play_unchecked(&mv);
    }

    c.bench_function("compress_position", |b| {
        b.iter(|| CompressedPosition::compress(black_box(&position)))
    });

    let compressed = CompressedPosition::compress(&position);
    c.bench_function("decompress_position", |b| {
        b.iter(|| black_box(&compressed).decompress().unwrap())
    });

    let bytes = compressed.to_bytes();
    let coder = default_coder();
    c.bench_function("huffman_position_bytes", |b| {
        b.iter(|| coder.compress_bytes(black_box(&bytes)).unwrap())
    });
}

criterion_group!(benches, game_codec_benchmark, position_benchmark);
criterion_main!(benches);
