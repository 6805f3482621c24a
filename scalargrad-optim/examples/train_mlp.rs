// Trains a small MLP on four hand-written samples with SGD.
//
// Run with: cargo run --example train_mlp -p scalargrad-optim

use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::nn::{MLP, Module};
use scalargrad_core::nn::losses::{MSELoss, Reduction};
use scalargrad_core::Graph;
use scalargrad_optim::{Optimizer, SGD};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(42);
    let model = MLP::new(&graph, 3, &[4, 4, 1], &mut rng)?;

    let xs: [[f64; 3]; 4] = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys: [f64; 4] = [1.0, -1.0, -1.0, 1.0];

    let params = model.parameters();
    let criterion = MSELoss::new(Reduction::Sum);
    let mut optim = SGD::new(0.1);

    // Parameters live below the mark; everything recorded per iteration
    // above it is reclaimed wholesale by rollback.
    let mark = graph.checkpoint();

    for step in 0..100 {
        graph.rollback(mark);
        optim.zero_grad(&params);

        let mut predictions = Vec::with_capacity(xs.len());
        for x in &xs {
            let inputs = graph.values(x);
            let output = model.forward(&inputs)?;
            predictions.push(output[0].clone());
        }

        let loss = criterion.calculate(&predictions, &ys)?;
        loss.backward();
        optim.step(&params);

        if step % 20 == 0 || step == 99 {
            println!("step {:3}  loss {:.6}", step, loss.value());
        }
    }

    println!("final predictions (targets {:?}):", ys);
    for x in &xs {
        let inputs = graph.values(x);
        let output = model.forward(&inputs)?;
        println!("  {:?} -> {:.4}", x, output[0].value());
    }

    Ok(())
}
