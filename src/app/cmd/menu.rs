use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use matcalc::{GaussSolver, Mat, MatResult, Shape, det};
use matcalc::input::{Bounds, parse_size, parse_value, parse_row, read_matrix, ensure_shape, generate};
use matcalc::util::format::num_str;
use crate::app::err::AppResult;

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args {
    /// Text file to load matrices from
    #[arg(short, long, default_value = "input.txt")]
    pub file: PathBuf,

    #[arg(short, long)]
    pub seed: Option<u64>,

    #[arg(long, default_value = "0")]
    pub log: u8,
}

pub fn run(args: &Args) -> AppResult<String> {
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy()
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), args.file.clone(), rng);
    session.run()?;

    Ok(String::new())
}

const MENU: &str = "\
A: add another matrix
B: subtract another matrix
C: multiply by a number
D: multiply by another matrix
E: determinant
F: trace
H: transpose
G: solve the linear system (Gauss)
Q: restart
anything else, lower case included: quit";

enum Source {
    Generate, Keyboard, File
}

enum Next {
    Restart, Quit
}

/// Prompt-driven session over any line source. Invalid answers are asked
/// again; end of input ends the session.
pub struct Session<R, W>
where R: BufRead, W: Write {
    input: R,
    output: W,
    file: PathBuf,
    bounds: Bounds,
    rng: StdRng,
}

impl<R, W> Session<R, W>
where R: BufRead, W: Write {
    pub fn new(input: R, output: W, file: PathBuf, rng: StdRng) -> Self {
        Session { input, output, file, bounds: Bounds::default(), rng }
    }

    pub fn run(&mut self) -> io::Result<()> {
        match self.main_loop() {
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                info!("end of input");
                Ok(())
            },
            res => res
        }
    }

    fn main_loop(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "We need a matrix.")?;
            let a = self.start()?;

            match self.menu(&a)? {
                Next::Restart => continue,
                Next::Quit => return Ok(())
            }
        }
    }

    fn start(&mut self) -> io::Result<Mat> {
        let shape = self.ask_shape()?;
        let a = match self.ask_source()? {
            Source::Generate => self.generate(shape)?,
            Source::Keyboard => self.ask_matrix(shape)?,
            Source::File     => self.load_matrix(shape)?,
        };
        self.show(&a)?;
        Ok(a)
    }

    fn menu(&mut self, a: &Mat) -> io::Result<Next> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let choice = self.read_line()?;

            debug!("menu: {choice}");

            match choice.as_str() {
                "A" => self.add_or_sub(a, true)?,
                "B" => self.add_or_sub(a, false)?,
                "C" => self.scale(a)?,
                "D" => self.mul(a)?,
                "E" => self.det(a)?,
                "F" => self.trace(a)?,
                "H" => self.show(&a.transpose())?,
                "G" => self.gauss(a)?,
                "Q" => return Ok(Next::Restart),
                _   => return Ok(Next::Quit)
            }
        }
    }

    // actions //

    fn add_or_sub(&mut self, a: &Mat, add: bool) -> io::Result<()> {
        let (m, n) = a.shape();
        writeln!(self.output, "Enter a second {m}x{n} matrix.")?;

        let b = self.ask_matrix(a.shape())?;
        let c = if add { a.add(&b) } else { a.sub(&b) };
        self.report(c)
    }

    fn scale(&mut self, a: &Mat) -> io::Result<()> {
        let k = loop {
            writeln!(self.output, "Enter a number in [{}, {}]:", self.bounds.min, self.bounds.max)?;
            let line = self.read_line()?;
            match parse_value(&line, &self.bounds) {
                Ok(k) => break k,
                Err(e) => writeln!(self.output, "{e}. Try again.")?
            }
        };
        self.show(&a.scale(k))
    }

    fn mul(&mut self, a: &Mat) -> io::Result<()> {
        let shape = loop {
            writeln!(self.output, "Size of the second matrix? It needs {} rows.", a.cols())?;
            let shape = self.ask_shape()?;
            if shape.0 == a.cols() {
                break shape
            }
            writeln!(self.output, "That does not fit. Try again.")?;
        };

        let b = self.ask_matrix(shape)?;
        self.report(a.mul(&b))
    }

    fn det(&mut self, a: &Mat) -> io::Result<()> {
        match det(a) {
            Ok(d) => writeln!(self.output, "determinant: {}", num_str(d, 3)),
            Err(e) => writeln!(self.output, "{e}")
        }
    }

    fn trace(&mut self, a: &Mat) -> io::Result<()> {
        match a.trace() {
            Ok(t) => writeln!(self.output, "trace: {}", num_str(t, 3)),
            Err(e) => writeln!(self.output, "{e}")
        }
    }

    fn gauss(&mut self, a: &Mat) -> io::Result<()> {
        writeln!(self.output, "Note: zero rows, proportional rows, inconsistent or underdetermined systems give wrong answers.")?;
        match GaussSolver::new().solve(a) {
            Ok(x) => writeln!(self.output, "{x}"),
            Err(e) => writeln!(self.output, "{e}")
        }
    }

    // input //

    fn ask_shape(&mut self) -> io::Result<Shape> {
        let cols = self.ask_size("columns")?;
        let rows = self.ask_size("rows")?;
        writeln!(self.output, "Size: {rows}x{cols}")?;
        Ok((rows, cols))
    }

    fn ask_size(&mut self, what: &str) -> io::Result<usize> {
        loop {
            writeln!(self.output, "Number of {what} (1 to {}):", self.bounds.max_dim)?;
            let line = self.read_line()?;
            match parse_size(&line, &self.bounds) {
                Ok(n) => return Ok(n),
                Err(e) => writeln!(self.output, "{e}. Try again.")?
            }
        }
    }

    fn ask_source(&mut self) -> io::Result<Source> {
        writeln!(self.output, "Press Enter to generate the matrix, or type anything to enter it yourself.")?;
        if self.read_line()?.is_empty() {
            return Ok(Source::Generate)
        }

        writeln!(self.output, "Send 0 to load it from {}, anything else to type it in.", self.file.display())?;
        if self.read_line()? == "0" {
            Ok(Source::File)
        } else {
            Ok(Source::Keyboard)
        }
    }

    fn ask_matrix(&mut self, shape: Shape) -> io::Result<Mat> {
        let (m, n) = shape;

        'retry: loop {
            writeln!(self.output,
                "Enter {m} rows of {n} numbers separated by spaces, each in [{}, {}].",
                self.bounds.min, self.bounds.max
            )?;

            let mut rows = Vec::with_capacity(m);
            for i in 0 .. m {
                writeln!(self.output, "row {}:", i + 1)?;
                let line = self.read_line()?;
                match parse_row(&line, &self.bounds) {
                    Ok(row) if row.len() == n => rows.push(row),
                    Ok(row) => {
                        writeln!(self.output, "Expected {n} numbers, got {}. Start over.", row.len())?;
                        continue 'retry
                    },
                    Err(e) => {
                        writeln!(self.output, "{e}. Start over.")?;
                        continue 'retry
                    }
                }
            }

            return Ok(Mat::from_rows(rows))
        }
    }

    fn load_matrix(&mut self, shape: Shape) -> io::Result<Mat> {
        loop {
            writeln!(self.output, "Put the matrix into {} and press Enter.", self.file.display())?;
            self.read_line()?;

            match read_matrix(&self.file, &self.bounds).and_then(|a| ensure_shape(a, shape)) {
                Ok(a) => return Ok(a),
                Err(e) => writeln!(self.output, "Cannot load the matrix: {e}")?
            }
        }
    }

    fn generate(&mut self, shape: Shape) -> io::Result<Mat> {
        generate(shape, &self.bounds, &mut self.rng).map_err(|e|
            io::Error::new(io::ErrorKind::InvalidInput, e)
        )
    }

    // output //

    fn show(&mut self, a: &Mat) -> io::Result<()> {
        write!(self.output, "{a}")
    }

    fn report(&mut self, res: MatResult<Mat>) -> io::Result<()> {
        match res {
            Ok(c) => self.show(&c),
            Err(e) => writeln!(self.output, "{e}")
        }
    }

    fn read_line(&mut self) -> io::Result<String> {
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::ErrorKind::UnexpectedEof.into())
        }
        Ok(line.trim().to_string())
    }
}
